//! Site content. Compiled in; edit here and redeploy.

use crate::models::profile::{
    Certification, ContactLinks, EducationItem, ExperienceItem, Profile, Project, ProjectTheme,
    SkillGroup,
};

pub const PROFILE: Profile = Profile {
    name: "Nkosimphile Mnisi",
    role: "Software Developer, AI/ML Engineer",
    focus: "Generative AI, cloud-based solutions, scalable tools, healthcare & education sectors.",
    bio: "Ambitious developer skilled in problem-solving. Thrives in collaborative environments.",
    skills: SKILLS,
    contact: ContactLinks {
        email: "nkosimphilem37@gmail.com",
        github: "https://github.com/MphileMnisi",
        linkedin: "https://www.linkedin.com/in/nkosimphile-siyabonga-mnisi-0a9a33389/",
    },
};

const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        items: &["React.js", "Next.js", "TypeScript", "Tailwind CSS", "GSAP"],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Python", "Firebase", "RESTful APIs", "GraphQL"],
    },
    SkillGroup {
        category: "AI/ML",
        items: &[
            "Generative AI",
            "LLM Integration",
            "NLP",
            "Prompt Engineering",
        ],
    },
    SkillGroup {
        category: "Professional",
        items: &["Agile/Scrum", "Git", "System Architecture"],
    },
];

pub const EXPERIENCE: &[ExperienceItem] = &[ExperienceItem {
    role: "Software Development & AI Trainee",
    company: "Capaciti",
    duration: "2025 - Present",
    description: &[
        "Designing and deploying full-stack web applications using Next.js and Firebase.",
        "Engineering AI solutions (RAG pipelines, BERT models for SentiCoreX).",
        "Architecting the \"CAPACITI Intelligent Talent Hub\" for AI-driven candidate matching.",
        "Actively applying ML concepts in agile environments.",
    ],
}];

pub const EDUCATION: &[EducationItem] = &[
    EducationItem {
        degree: "National Diploma in Information Technology",
        institution: "Vaal University of Technology",
        duration: "2022 - 2024",
        details: &[
            "Specialized in software development, database systems, and computer networking.",
            "Developed a comprehensive web application for the final year capstone project.",
            "Gained practical experience with various programming languages and development methodologies.",
        ],
    },
    EducationItem {
        degree: "Matric (Grade 12)",
        institution: "Thuto Lesedi Secondary School",
        duration: "2017 - 2021",
        details: &[
            "Graduated with a Bachelor's degree pass, enabling university entrance.",
            "Excelled in Accounting, Business, Economics and Mathematics subjects.",
            "Participated in the school's science and technology club.",
        ],
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "FNB App Academy",
        issuer: "IT Varsity",
        date: "2025",
        sub_certificates: &[],
    },
    Certification {
        title: "AI Bootcamp",
        issuer: "Coursera",
        date: "Oct 2025",
        sub_certificates: &[
            "Introduction to Artificial Intelligence",
            "Generative AI: Prompt Engineering Basics",
            "Building Generative AI-Powered Applications with Python",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Pentacore",
        description: "Serverless, containerised platform deployed on Google Cloud Run.",
        highlights: &[
            "Serverless architecture",
            "Containerization",
            "Auto-scaling",
            "Optimized Docker images for cold start latency",
        ],
        tags: &["Google Cloud Run", "Docker", "React", "DevOps"],
        image_url: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31",
        live_url: Some("https://pentacore-189473728151.us-west1.run.app/"),
        source_url: None,
        theme: Some(ProjectTheme::Dark),
    },
    Project {
        title: "CAPACITI Intelligent Talent Hub",
        description: "AI-driven candidate matching with dynamic profiles and analytics.",
        highlights: &[
            "AI-driven matching",
            "Dynamic profiles",
            "Analytics dashboard",
            "Semantic mapping layer for skill taxonomy standardization",
        ],
        tags: &["React", "Next.js", "AI Matching", "Tailwind CSS"],
        image_url: "https://images.unsplash.com/photo-1521737604893-d14cc237f11d",
        live_url: Some("https://capacitihub.vercel.app/"),
        source_url: None,
        theme: Some(ProjectTheme::Tech),
    },
    Project {
        title: "RecruitmentAI.Notebook",
        description: "Interactive audit of bias in AI-assisted hiring.",
        highlights: &[
            "Bias auditing metrics",
            "Interactive visualizations",
            "Mitigation algorithms",
            "Web Workers for heavy client-side statistical processing",
        ],
        tags: &["AI Ethics", "Data Visualization", "React"],
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71",
        live_url: Some("https://bias-in-hiring.vercel.app/"),
        source_url: None,
        theme: Some(ProjectTheme::Calm),
    },
    Project {
        title: "Conversational AI Chatbot",
        description: "A responsive chatbot that provides context-aware responses using modern NLP.",
        highlights: &[
            "Context retention",
            "Streaming responses",
            "Sliding window context manager",
        ],
        tags: &["React", "TypeScript", "AI/ML", "NLP API"],
        image_url: "https://images.unsplash.com/photo-1534536281715-e28d76689b4d",
        live_url: Some("https://chatbot-ten-mu-89.vercel.app/"),
        source_url: Some("https://github.com/nkosimphile-mnisi/conversational-ai-chatbot"),
        theme: Some(ProjectTheme::Tech),
    },
    Project {
        title: "AI Resume Builder",
        description: "Generative AI tool for ATS-optimized resumes with targeted keywords.",
        highlights: &[
            "ATS optimization",
            "AI content generation",
            "PDF export",
            "Canvas-based rendering for formatting consistency",
        ],
        tags: &["React", "Next.js", "Generative AI", "PDF Gen"],
        image_url: "https://images.unsplash.com/photo-1586281380349-632531db7ed4",
        live_url: Some("https://ai-resume-builder-one-phi.vercel.app/"),
        source_url: Some("https://github.com/nkosimphile-mnisi/ai-resume-builder"),
        theme: Some(ProjectTheme::Creative),
    },
    Project {
        title: "SentiCoreX",
        description: "AI-powered sentiment analysis for business intelligence and customer feedback.",
        highlights: &[
            "Multi-channel ingestion",
            "Real-time analysis",
            "Fine-tuned BERT model for sarcasm detection",
        ],
        tags: &["React", "AI/ML", "NLP", "Data Viz"],
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f",
        live_url: Some("https://senticore-x.vercel.app/"),
        source_url: Some("https://github.com/nkosimphile-mnisi/senticore-x"),
        theme: Some(ProjectTheme::Colorful),
    },
];
