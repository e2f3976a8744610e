//! English page content (canonical locale).

use super::model::{ProfileContent, Skill, SkillCategory};

// ==================== Skill Data ====================

const NETWORKING_SKILLS: &[Skill] = &[
    Skill { name: "Network Monitoring", proficiency: 95 },
    Skill { name: "Network Troubleshooting", proficiency: 85 },
    Skill { name: "Network Design", proficiency: 80 },
    Skill { name: "Network Security", proficiency: 75 },
    Skill { name: "Network Automation", proficiency: 85 },
    Skill { name: "Wireless Networking", proficiency: 70 },
    Skill { name: "Routing & Switching", proficiency: 90 },
];

const SYSADMIN_SKILLS: &[Skill] = &[
    Skill { name: "Active Directory", proficiency: 95 },
    Skill { name: "Server Administration", proficiency: 85 },
    Skill { name: "Cloud Computing", proficiency: 80 },
    Skill { name: "Backup & Disaster Recovery", proficiency: 80 },
    Skill { name: "Virtualization", proficiency: 60 },
    Skill { name: "Patch Management", proficiency: 75 },
    Skill { name: "Database Administration", proficiency: 90 },
];

const SECURITY_SKILLS: &[Skill] = &[
    Skill { name: "Firewall Configuration", proficiency: 90 },
    Skill { name: "VPNs & Remote Access Security", proficiency: 85 },
    Skill { name: "Intrusion Detection & Prevention Systems", proficiency: 65 },
    Skill { name: "Network Access Control", proficiency: 85 },
    Skill { name: "SEIM", proficiency: 60 },
    Skill { name: "Cryptography & PKI", proficiency: 60 },
    Skill { name: "Penetration Testing", proficiency: 50 },
];

const PROGRAMMING_SKILLS: &[Skill] = &[
    Skill { name: "Python", proficiency: 98 },
    Skill { name: "Netmiko", proficiency: 85 },
    Skill { name: "SQL", proficiency: 95 },
    Skill { name: "Shell Scripting", proficiency: 65 },
    Skill { name: "Configuration as Code", proficiency: 50 },
    Skill { name: "Java", proficiency: 90 },
    Skill { name: "C++", proficiency: 60 },
];

const TOOLS_SKILLS: &[Skill] = &[
    Skill { name: "Cisco Packet Tracer", proficiency: 98 },
    Skill { name: "Wireshark", proficiency: 96 },
    Skill { name: "SolarWinds", proficiency: 80 },
    Skill { name: "Nagios", proficiency: 65 },
    Skill { name: "Nmap", proficiency: 73 },
    Skill { name: "Ansible", proficiency: 80 },
    Skill { name: "PRTG", proficiency: 65 },
];

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { id: "networking", label: "🔧 Networking", skills: NETWORKING_SKILLS },
    SkillCategory { id: "sysadmin", label: "🖥️ Systems Administration", skills: SYSADMIN_SKILLS },
    SkillCategory { id: "security", label: "🔐 Security", skills: SECURITY_SKILLS },
    SkillCategory { id: "programming", label: "💻 Programming & Scripting", skills: PROGRAMMING_SKILLS },
    SkillCategory { id: "tools", label: "🧰 Tools & Utilities", skills: TOOLS_SKILLS },
];

// ==================== Page Text ====================

/// English profile content (canonical — French is validated against this).
pub const ENGLISH_CONTENT: ProfileContent = ProfileContent {
    name: "Gareth Nassar",
    job_title: "Network & System Administrator",
    resume_button_label: "📄 Resume",

    intro_text: "For me, networking isn't just a vocation—it's a way of seeing the world. \
From configuring my first home Wi-Fi router to helping neighbors troubleshoot their internet issues, \
I've always been drawn to the flow of data and the systems that connect us.\n\n\
I approach every project with the same passion and precision, whether it's optimizing enterprise \
networks or securing local systems. Networking isn't just what I do—it's who I am.",

    skill_categories: SKILL_CATEGORIES,
    skills_heading: "🧠 Skills",

    what_i_can_do_heading: "🛠️ What I Can Do",
    what_i_can_do: &[
        "Design, configure and secure business networks from scratch",
        "Troubleshoot network and system outages with speed and precision",
        "Automate infrastructure tasks with Python, PowerShell and Ansible",
        "Perform basic penetration testing to identify and report vulnerabilities",
        "Explain complex technical issues clearly to non-technical users",
    ],

    tips_heading: "💡 My Networking Tips",
    tips: &[
        "Document everything. Predictability starts with records.",
        "Automate to worry less and do more.",
        "Keep networks simple and scalable.",
        "Monitor traffic to spot issues early.",
        "Think like an attacker. Anticipate weaknesses and close gaps before they're exploited.",
    ],

    motto_heading: "💬 Signature Quote",
    motto_text: "Every good Network Admin should be part scientist, part artist, and part detective.",
    motto_attribution: "— Gareth Nassar, 2023",

    certification_label: "🎖️ CompTIA Network+",

    contact_footer: "📬 Contact: garethnassar@gmail.com | \
[LinkedIn](https://www.linkedin.com/in/canuckcowboy/) | \
[GitHub](https://github.com/canuck-cowboy)",
};
