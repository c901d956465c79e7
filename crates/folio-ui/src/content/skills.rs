use super::{Skill, SkillCategory, Technology};

const fn skill(name: &'static str, level: u8, from: &'static str, to: &'static str) -> Skill {
    Skill {
        name,
        level,
        gradient: (from, to),
    }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            skill("HTML5", 95, "#f97316", "#ef4444"),
            skill("CSS3", 90, "#3b82f6", "#06b6d4"),
            skill("JavaScript", 85, "#facc15", "#f97316"),
            skill("React.js", 88, "#22d3ee", "#3b82f6"),
            skill("Tailwind CSS", 92, "#2dd4bf", "#3b82f6"),
        ],
    },
    SkillCategory {
        title: "Backend Development",
        skills: &[
            skill("Node.js", 80, "#4ade80", "#16a34a"),
            skill("Express.js", 75, "#4b5563", "#1f2937"),
            skill("REST APIs", 78, "#a855f7", "#ec4899"),
            skill("Database Design", 70, "#6366f1", "#9333ea"),
        ],
    },
    SkillCategory {
        title: "Design & Creativity",
        skills: &[
            skill("Figma", 85, "#ec4899", "#8b5cf6"),
            skill("Canva", 90, "#60a5fa", "#a855f7"),
            skill("UI/UX Design", 82, "#fb7185", "#ec4899"),
            skill("Blender (3D)", 65, "#fb923c", "#ef4444"),
        ],
    },
    SkillCategory {
        title: "Tools & Systems",
        skills: &[
            skill("Linux", 75, "#facc15", "#f97316"),
            skill("Git & GitHub", 88, "#374151", "#111827"),
            skill("VS Code", 95, "#3b82f6", "#1d4ed8"),
            skill("Terminal/CLI", 80, "#22c55e", "#0d9488"),
        ],
    },
];

pub const TECHNOLOGIES: &[Technology] = &[
    Technology {
        name: "React",
        glyph: "⚛️",
        description: "Modern component-based UI library",
    },
    Technology {
        name: "Node.js",
        glyph: "🟢",
        description: "Server-side JavaScript runtime",
    },
    Technology {
        name: "Tailwind",
        glyph: "🎨",
        description: "Utility-first CSS framework",
    },
    Technology {
        name: "Figma",
        glyph: "🎯",
        description: "Collaborative design tool",
    },
    Technology {
        name: "Blender",
        glyph: "🎭",
        description: "3D modeling and animation",
    },
    Technology {
        name: "Linux",
        glyph: "🐧",
        description: "Open-source operating system",
    },
    Technology {
        name: "Git",
        glyph: "📚",
        description: "Version control system",
    },
    Technology {
        name: "TypeScript",
        glyph: "📘",
        description: "Typed JavaScript superset",
    },
];

pub const LEARNING_PATH: &[&str] = &["Next.js", "TypeScript", "Docker", "AWS", "Three.js", "WebGL"];

/// Chips under the playground.
pub const PLAYGROUND_TECH: &[&str] = &[
    "Three.js",
    "React Three Fiber",
    "WebGL",
    "Blender",
    "TypeScript",
];
