//! French page content.
//!
//! Category ids and skill counts must match `en.rs` exactly; the catalog
//! refuses to start otherwise. Widely-used technical terms and product names
//! stay in English, as is usual in French IT writing.

use super::model::{ProfileContent, Skill, SkillCategory};

// ==================== Skill Data ====================

const NETWORKING_SKILLS: &[Skill] = &[
    Skill { name: "Supervision réseau", proficiency: 95 },
    Skill { name: "Dépannage réseau", proficiency: 85 },
    Skill { name: "Conception de réseaux", proficiency: 80 },
    Skill { name: "Sécurité des réseaux", proficiency: 75 },
    Skill { name: "Automatisation réseau", proficiency: 85 },
    Skill { name: "Réseaux sans fil", proficiency: 70 },
    Skill { name: "Routage et commutation", proficiency: 90 },
];

const SYSADMIN_SKILLS: &[Skill] = &[
    Skill { name: "Active Directory", proficiency: 95 },
    Skill { name: "Administration de serveurs", proficiency: 85 },
    Skill { name: "Informatique en nuage", proficiency: 80 },
    Skill { name: "Sauvegarde et reprise après sinistre", proficiency: 80 },
    Skill { name: "Virtualisation", proficiency: 60 },
    Skill { name: "Gestion des correctifs", proficiency: 75 },
    Skill { name: "Administration de bases de données", proficiency: 90 },
];

const SECURITY_SKILLS: &[Skill] = &[
    Skill { name: "Configuration de pare-feu", proficiency: 90 },
    Skill { name: "VPN et sécurité des accès distants", proficiency: 85 },
    Skill { name: "Systèmes de détection et de prévention d'intrusion", proficiency: 65 },
    Skill { name: "Contrôle d'accès réseau", proficiency: 85 },
    Skill { name: "SEIM", proficiency: 60 },
    Skill { name: "Cryptographie et PKI", proficiency: 60 },
    Skill { name: "Tests d'intrusion", proficiency: 50 },
];

const PROGRAMMING_SKILLS: &[Skill] = &[
    Skill { name: "Python", proficiency: 98 },
    Skill { name: "Netmiko", proficiency: 85 },
    Skill { name: "SQL", proficiency: 95 },
    Skill { name: "Scripts shell", proficiency: 65 },
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
    SkillCategory { id: "networking", label: "🔧 Réseaux", skills: NETWORKING_SKILLS },
    SkillCategory { id: "sysadmin", label: "🖥️ Administration de systèmes", skills: SYSADMIN_SKILLS },
    SkillCategory { id: "security", label: "🔐 Sécurité", skills: SECURITY_SKILLS },
    SkillCategory { id: "programming", label: "💻 Programmation et scripts", skills: PROGRAMMING_SKILLS },
    SkillCategory { id: "tools", label: "🧰 Outils et utilitaires", skills: TOOLS_SKILLS },
];

// ==================== Page Text ====================

/// French profile content.
pub const FRENCH_CONTENT: ProfileContent = ProfileContent {
    name: "Gareth Nassar",
    job_title: "Administrateur réseaux et systèmes",
    resume_button_label: "📄 CV",

    intro_text: "Pour moi, les réseaux ne sont pas qu'un métier : c'est une façon de voir le monde. \
Depuis la configuration de mon premier routeur Wi-Fi domestique jusqu'au dépannage des connexions \
Internet de mes voisins, j'ai toujours été fasciné par la circulation des données et les systèmes \
qui nous relient.\n\n\
J'aborde chaque projet avec la même passion et la même rigueur, qu'il s'agisse d'optimiser des \
réseaux d'entreprise ou de sécuriser des systèmes locaux. Les réseaux, ce n'est pas seulement ce \
que je fais : c'est ce que je suis.",

    skill_categories: SKILL_CATEGORIES,
    skills_heading: "🧠 Compétences",

    what_i_can_do_heading: "🛠️ Ce que je sais faire",
    what_i_can_do: &[
        "Concevoir, configurer et sécuriser des réseaux d'entreprise de A à Z",
        "Diagnostiquer les pannes réseau et système avec rapidité et précision",
        "Automatiser les tâches d'infrastructure avec Python, PowerShell et Ansible",
        "Réaliser des tests d'intrusion de base pour identifier et signaler les vulnérabilités",
        "Expliquer clairement des problèmes techniques complexes à un public non technique",
    ],

    tips_heading: "💡 Mes conseils réseau",
    tips: &[
        "Documentez tout. La prévisibilité commence par des traces écrites.",
        "Automatisez pour vous inquiéter moins et accomplir plus.",
        "Gardez des réseaux simples et évolutifs.",
        "Surveillez le trafic pour repérer les problèmes tôt.",
        "Pensez comme un attaquant. Anticipez les faiblesses et comblez les failles avant qu'elles ne soient exploitées.",
    ],

    motto_heading: "💬 Citation signature",
    motto_text: "Tout bon administrateur réseau doit être à la fois scientifique, artiste et détective.",
    motto_attribution: "— Gareth Nassar, 2023",

    certification_label: "🎖️ CompTIA Network+",

    contact_footer: "📬 Contact : garethnassar@gmail.com | \
[LinkedIn](https://www.linkedin.com/in/canuckcowboy/) | \
[GitHub](https://github.com/canuck-cowboy)",
};
