//! Static site copy, consumed read-only at render time.
//!
//! Every section pulls its strings from here so the markup stays free of
//! literals and the copy can be edited in one place.

pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", section_id: "home" },
    NavItem { label: "About", section_id: "about" },
    NavItem { label: "Programs", section_id: "programs" },
    NavItem { label: "Contact", section_id: "contact" },
];

pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub accent_word: &'static str,
    pub description: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "Non-Profit Organization",
    headline: "Empowering Rural Education with AI",
    accent_word: "AI",
    description: "Democratizing Artificial Intelligence for the next billion users. \
        We bridge the gap between rural communities and cutting-edge technology \
        through accessible education.",
    primary_cta: "Start Learning",
    secondary_cta: "Partner With Us",
};

pub struct Stat {
    pub label: &'static str,
    pub value: i64,
    pub suffix: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Rural Communities", value: 150, suffix: "+" },
    Stat { label: "Certified Educators", value: 500, suffix: "+" },
    Stat { label: "Students Trained", value: 10_000, suffix: "+" },
    Stat { label: "Countries Served", value: 25, suffix: "+" },
];

pub struct About {
    pub heading: &'static str,
    pub accent: &'static str,
    pub mission: &'static str,
    pub quote: &'static str,
    pub quote_author: &'static str,
    pub quote_role: &'static str,
    pub quote_initials: &'static str,
}

pub const ABOUT: About = About {
    heading: "Bridging the",
    accent: "Digital Divide",
    mission: "We envision a world where geographic location doesn't limit access to \
        quality technological literacy. By combining local mentorship with global AI \
        resources, we are rewriting the future of rural education.",
    quote: "\"AAItoai transformed our community's understanding of technology. \
        Now our farmers use AI to optimize crops!\"",
    quote_author: "Maria Santos",
    quote_role: "Rural Educator, Philippines",
    quote_initials: "MS",
};

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [Value; 4] = [
    Value {
        title: "Accessibility First",
        description: "Simple, affordable, and available to everyone.",
    },
    Value {
        title: "Community Driven",
        description: "Building a network of passionate local educators.",
    },
    Value {
        title: "Practical Learning",
        description: "Real-world applications improving daily life.",
    },
    Value {
        title: "Inclusive Growth",
        description: "Benefits reaching every corner of society.",
    },
];

pub struct Program {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const PROGRAMS: [Program; 3] = [
    Program {
        title: "AI Fundamentals",
        description: "Start your AI journey with basic concepts explained in simple \
            terms, designed specifically for rural learners.",
        features: &["No technical background required", "Local language support", "Offline learning materials"],
    },
    Program {
        title: "Educator Certification",
        description: "Become a certified AI educator and help spread knowledge in \
            your community.",
        features: &["Comprehensive training", "Teaching resources", "Certificate recognition"],
    },
    Program {
        title: "AI for Agriculture",
        description: "Practical AI applications for improving agricultural practices \
            and small business operations.",
        features: &["Real-world applications", "Case studies", "Local success stories"],
    },
];

pub struct Contact {
    pub heading: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub const CONTACT: Contact = Contact {
    heading: "Get in Touch",
    description: "Ready to bring AI education to your community? Whether you're an \
        educator or a community leader, we'd love to hear from you.",
    email: "contact@aaitoai.org",
    phone: "+1 (555) 123-4567",
    address: "1234 Education Drive, Learning City, LC 12345",
};

pub const INTEREST_OPTIONS: [&str; 5] = [
    "General Information",
    "Becoming an AI Educator",
    "Learning Programs",
    "Partnership Opportunities",
    "Community Implementation",
];

pub struct Footer {
    pub blurb: &'static str,
    pub program_links: &'static [&'static str],
    pub company_links: &'static [&'static str],
    pub social_links: &'static [&'static str],
    pub copyright: &'static str,
}

pub const FOOTER: Footer = Footer {
    blurb: "Empowering rural communities worldwide with accessible, practical \
        Artificial Intelligence education to bridge the digital divide.",
    program_links: &["AI Fundamentals", "Educator Certification", "Agriculture & Business"],
    company_links: &["About Us", "Careers", "Blog", "Contact"],
    social_links: &["Facebook", "Twitter", "LinkedIn"],
    copyright: "© 2025 AAItoai Association. All rights reserved.",
};

pub const SITE_NAME: &str = "AAItoai";
pub const SITE_TAGLINE: &str = "Empowering Rural Education...";
