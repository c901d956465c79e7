use super::{SkillGroup, TimelineEntry};

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2023",
        title: "Started Web Development",
        description: "Began learning HTML, CSS, and JavaScript",
    },
    TimelineEntry {
        year: "2024",
        title: "React & Node.js",
        description: "Mastered React.js and started backend development",
    },
    TimelineEntry {
        year: "2024",
        title: "3D Development",
        description: "Exploring Blender and Three.js for creative projects",
    },
    TimelineEntry {
        year: "Now",
        title: "Building Amazing Things",
        description: "Creating innovative web experiences",
    },
];

pub const WHAT_I_DO: &[&str] = &[
    "Full-Stack Web Development",
    "UI/UX Design & Prototyping",
    "3D Modeling & Animation",
    "Linux System Administration",
];

pub const FUN_FACTS: &[&str] = &[
    "🚀 Started coding at a young age and never looked back",
    "🎨 Love combining creativity with technical skills",
    "🐧 Linux enthusiast and open-source contributor",
    "📱 Always learning new technologies and frameworks",
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        items: &["HTML5", "CSS3", "JavaScript", "React.js", "Tailwind CSS"],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Express.js", "REST APIs"],
    },
    SkillGroup {
        category: "Design",
        items: &["Figma", "Canva", "UI/UX Design"],
    },
    SkillGroup {
        category: "3D & Tools",
        items: &["Blender", "Linux", "Git", "VS Code"],
    },
];
