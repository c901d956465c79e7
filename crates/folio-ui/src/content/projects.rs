use super::{Project, ProjectStatus};

const GITHUB: &str = "https://github.com/TemoTemo12";

/// "View All Projects on GitHub".
pub const PROJECTS_URL: &str = GITHUB;

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with React, Node.js, and modern payment integration. Features include user authentication, product management, and real-time order tracking.",
        tech: &["React", "Node.js", "MongoDB", "Stripe"],
        github: GITHUB,
        live: "#",
        status: ProjectStatus::Featured,
    },
    Project {
        title: "3D Portfolio Website",
        description: "Interactive 3D portfolio built with Three.js and React. Showcases 3D models, animations, and immersive user experiences with responsive design.",
        tech: &["React", "Three.js", "Blender", "GSAP"],
        github: GITHUB,
        live: "#",
        status: ProjectStatus::New,
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
        tech: &["React", "Firebase", "Tailwind CSS", "TypeScript"],
        github: GITHUB,
        live: "#",
        status: ProjectStatus::Popular,
    },
    Project {
        title: "Weather Dashboard",
        description: "Beautiful weather application with location-based forecasts, interactive maps, and detailed weather analytics using modern APIs.",
        tech: &["JavaScript", "HTML5", "CSS3", "OpenWeather API"],
        github: GITHUB,
        live: "#",
        status: ProjectStatus::Classic,
    },
    Project {
        title: "Real-time Chat App",
        description: "Modern chat application with Socket.io, featuring private messaging, group chats, file sharing, and emoji reactions.",
        tech: &["React", "Socket.io", "Node.js", "Express"],
        github: GITHUB,
        live: "#",
        status: ProjectStatus::Active,
    },
    Project {
        title: "API Testing Tool",
        description: "Developer-friendly API testing and documentation tool with automated testing, request collections, and team collaboration.",
        tech: &["React", "Node.js", "REST API", "Postman"],
        github: GITHUB,
        live: "#",
        status: ProjectStatus::Tool,
    },
];
