//! Static site copy. Every piece of text the page renders comes from [`SITE`].

#[derive(Clone, Copy, Debug)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub download: bool,
}

impl Link {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            download: false,
        }
    }

    pub const fn download(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            download: true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub linkedin: Option<&'static str>,
    pub image: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub platform: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Screenshot {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub short_description: &'static str,
    pub logo: &'static str,
    pub logo_dark: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Hero {
    pub title_line1: &'static str,
    pub title_line2: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub primary: Link,
    pub secondary: Link,
    pub pledge: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct CardSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [Card],
}

#[derive(Clone, Copy, Debug)]
pub struct Download {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary: Link,
    pub secondary: Link,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Footer {
    pub copyright: &'static str,
    pub links: &'static [Link],
    pub social: &'static [SocialLink],
}

#[derive(Clone, Copy, Debug)]
pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub form_title: &'static str,
    pub submit_label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Seo {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct SiteConfig {
    pub brand: Brand,
    pub nav_links: &'static [Link],
    pub nav_cta: Link,
    pub hero: Hero,
    pub problems: CardSection,
    pub solution_title: &'static str,
    pub solution_subtitle: &'static str,
    pub solution_description: &'static str,
    pub how_it_works_title: &'static str,
    pub steps: &'static [Step],
    pub showcase: &'static [Screenshot],
    pub features: CardSection,
    pub differentiators: CardSection,
    pub tech_stack_title: &'static str,
    pub tech_stack: &'static [&'static str],
    pub roadmap: CardSection,
    pub team_title: &'static str,
    pub team_subtitle: &'static str,
    pub team: &'static [TeamMember],
    pub faq_title: &'static str,
    pub faq: &'static [FaqItem],
    pub download: Download,
    pub footer: Footer,
    pub contact: Contact,
    pub seo: Seo,
}

const DESCRIPTION: &str = "The first AI-Powered Content Management System designed to help you break free from platform chaos. Manage, publish, and scale your voice\u{2014}all from one place.";
const SHORT_DESCRIPTION: &str = "Your entire content ecosystem in your pocket.";
const APK_HREF: &str = "/app-arm64-v8a-release.apk";
const COMPANY_LINKEDIN: &str = "https://linkedin.com/company/vextralabs";

pub static SITE: SiteConfig = SiteConfig {
    brand: Brand {
        name: "Vextra",
        tagline: "Create once. Publish everywhere.",
        description: DESCRIPTION,
        short_description: SHORT_DESCRIPTION,
        logo: "/vextra_logo.png",
        logo_dark: "/vextra_logo_dark.png",
    },
    nav_links: &[
        Link::new("Features", "/#features"),
        Link::new("How it Works", "/#how-it-works"),
        Link::new("Team", "/#team"),
        Link::new("Contact", "/contact"),
    ],
    nav_cta: Link::new("Download App", "/#download"),
    hero: Hero {
        title_line1: "Create once.",
        title_line2: "Publish",
        title_highlight: "everywhere.",
        subtitle: DESCRIPTION,
        primary: Link::download("Download Vextra", APK_HREF),
        secondary: Link::new("Learn More", "/#features"),
        pledge: SHORT_DESCRIPTION,
    },
    problems: CardSection {
        title: "Why is creating content so hard?",
        subtitle: "",
        items: &[
            Card {
                icon: "\u{26A1}",
                title: "The Chaos",
                description: "You have a brilliant idea. You write it down. Then the chaos begins. Formatting, resizing, tweaking.",
            },
            Card {
                icon: "\u{1F504}",
                title: "The Switch",
                description: "Switching between five different apps just to get one post out destroys your flow.",
            },
            Card {
                icon: "\u{1F4C9}",
                title: "The Burnout",
                description: "By the time you hit publish, the excitement is gone. Content creation shouldn't feel like a chore.",
            },
        ],
    },
    solution_title: "Meet Vextra.",
    solution_subtitle: "Your new creative command center.",
    solution_description: "Vextra is the unifying layer for your digital presence. It's a mobile-first ACMS that brings creation, management, and publishing under one roof. No more app switching. Just pure creative flow.",
    how_it_works_title: "Order from chaos.",
    steps: &[
        Step {
            number: "01",
            title: "Create",
            description: "Use our distraction-free editor to craft text and media content with AI assistance.",
        },
        Step {
            number: "02",
            title: "Manage",
            description: "Organize your drafts and ideas in a unified library accessible anywhere.",
        },
        Step {
            number: "03",
            title: "Publish",
            description: "Push directly to LinkedIn, Inspire feed, and soon everywhere else with a single tap.",
        },
        Step {
            number: "04",
            title: "Collaborate",
            description: "Chat with your community and get feedback in real-time.",
        },
    ],
    showcase: &[
        Screenshot {
            src: "/screenshot-craft.jpg",
            alt: "Craft Post Screen",
            title: "Create with AI",
            description: "Craft perfect posts with AI-powered suggestions",
        },
        Screenshot {
            src: "/screenshot-review.jpg",
            alt: "Review & Publish Screen",
            title: "Review & Publish",
            description: "Preview and publish to multiple platforms",
        },
        Screenshot {
            src: "/screenshot-profile-filter.jpg",
            alt: "Profile with Filters",
            title: "Edit Media",
            description: "Professional editing tools at your fingertips",
        },
    ],
    features: CardSection {
        title: "Feature Highlights",
        subtitle: "",
        items: &[
            Card {
                icon: "\u{270F}\u{FE0F}",
                title: "AI-Powered Editor",
                description: "Writing, reimagined. A clean, powerful editor with AI assistance that gets out of your way.",
            },
            Card {
                icon: "\u{1F4BC}",
                title: "LinkedIn Publishing",
                description: "Go specific, go viral. Seamless OAuth integration with LinkedIn for instant publishing.",
            },
            Card {
                icon: "\u{1F4AC}",
                title: "Real-Time Chat",
                description: "Built for creators. WebSocket-based messaging keeps your community in sync.",
            },
            Card {
                icon: "\u{2728}",
                title: "Inspire Feed",
                description: "Never run out of ideas. Tap into the Vextra creator community for inspiration.",
            },
            Card {
                icon: "\u{1F4F1}",
                title: "Mobile-First",
                description: "Creativity strikes anywhere. Vextra is built from the ground up for your phone.",
            },
            Card {
                icon: "\u{2601}\u{FE0F}",
                title: "Cloud Sync",
                description: "Your content, everywhere. Automatic cloud backup and sync across devices.",
            },
        ],
    },
    differentiators: CardSection {
        title: "Not just another tool.",
        subtitle: "A new way of working.",
        items: &[
            Card {
                icon: "\u{1F517}",
                title: "Unified Platform",
                description: "Stop stitching together disjointed tools and losing precious time switching between apps. Vextra brings everything under one roof\u{2014}create, manage, schedule, and publish from a single dashboard. Your content workflow, simplified.",
            },
            Card {
                icon: "\u{1F4F1}",
                title: "Mobile-First Design",
                description: "Creativity strikes anywhere\u{2014}on your commute, during lunch, or at midnight. Vextra is engineered from the ground up for mobile devices, giving you the full power of a desktop content studio in your pocket.",
            },
            Card {
                icon: "\u{1F3A8}",
                title: "Creator-Focused Experience",
                description: "We don't just build features; we build superpowers for creators. Every interaction is designed to amplify your creative flow, not interrupt it. Beautiful interfaces, intuitive controls, zero learning curve.",
            },
            Card {
                icon: "\u{1F916}",
                title: "AI-Enhanced Productivity",
                description: "Let artificial intelligence handle the heavy lifting. From generating captions and optimizing hashtags to suggesting posting times\u{2014}our AI assistant helps you create better content faster, so you can focus on what matters.",
            },
        ],
    },
    tech_stack_title: "Built on speed and security",
    tech_stack: &["Flutter", "FastAPI", "PostgreSQL", "Google Cloud", "WebSockets"],
    roadmap: CardSection {
        title: "What's Coming Next",
        subtitle: "",
        items: &[
            Card {
                icon: "\u{1F916}",
                title: "Advanced AI Generation",
                description: "Let Vextra's AI help you draft, refine, and optimize your posts automatically.",
            },
            Card {
                icon: "\u{1F4F8}",
                title: "Instagram Integration",
                description: "Publish directly to Instagram with auto-formatting and hashtag suggestions.",
            },
            Card {
                icon: "\u{1F426}",
                title: "X (Twitter) Integration",
                description: "Thread creation and scheduling for X coming soon.",
            },
            Card {
                icon: "\u{1F4D8}",
                title: "Facebook Integration",
                description: "Manage your Facebook presence alongside other platforms.",
            },
        ],
    },
    team_title: "Meet the Team",
    team_subtitle: "Built by creators, for creators.",
    team: &[
        TeamMember {
            name: "Rajveer Goud",
            role: "Lead Developer",
            linkedin: Some("https://linkedin.com/in/rajveergoud"),
            image: Some("/rajveer.jpeg"),
        },
        TeamMember {
            name: "Nitin Patel",
            role: "Developer",
            linkedin: Some("https://linkedin.com/in/nitinpatel"),
            image: Some("/nitin.png"),
        },
        TeamMember {
            name: "Ayush Nagre",
            role: "Developer",
            linkedin: Some("https://linkedin.com/in/ayushnagre"),
            image: None,
        },
        TeamMember {
            name: "Shivani Gupta",
            role: "Developer",
            linkedin: Some("https://linkedin.com/in/shivanigupta"),
            image: None,
        },
        TeamMember {
            name: "Pankaj Bairagi",
            role: "Developer",
            linkedin: Some("https://linkedin.com/in/pankajbairagi"),
            image: None,
        },
    ],
    faq_title: "Frequently Asked Questions",
    faq: &[
        FaqItem {
            question: "What is Vextra?",
            answer: "Vextra is an AI-powered content management system designed for creators. It helps you create, manage, and publish content across multiple platforms from a single mobile app.",
        },
        FaqItem {
            question: "Is Vextra free to use?",
            answer: "Yes! Vextra is currently free during our early access phase. Download the app and start creating today.",
        },
        FaqItem {
            question: "Which platforms does Vextra support?",
            answer: "Currently, Vextra supports publishing to LinkedIn and our built-in Inspire feed. Instagram, X (Twitter), and Facebook integrations are coming soon.",
        },
        FaqItem {
            question: "Is my content secure?",
            answer: "Absolutely. Your content is encrypted and stored securely on Google Cloud infrastructure. We never share your content with third parties.",
        },
        FaqItem {
            question: "Can I use Vextra on iOS?",
            answer: "Vextra is currently available for Android. iOS support is on our roadmap and coming soon.",
        },
        FaqItem {
            question: "How does the AI assistance work?",
            answer: "Our AI helps you generate captions, suggest hashtags, and enhance your content. Simply provide a prompt or upload media, and let AI do the heavy lifting.",
        },
    ],
    download: Download {
        title: "Ready to shape the future of content?",
        subtitle: "Don't let your ideas get lost in the noise.",
        primary: Link::download("Download Vextra APK", APK_HREF),
        secondary: Link::new("Follow Vextra Labs", COMPANY_LINKEDIN),
        note: "Available for Android. iOS coming soon.",
    },
    footer: Footer {
        copyright: "\u{00A9} 2025 Vextra Labs. All rights reserved.",
        links: &[
            Link::new("Privacy Policy", "/privacy"),
            Link::new("Terms of Service", "/terms"),
            Link::new("Contact", "/contact"),
        ],
        social: &[
            SocialLink {
                platform: "LinkedIn",
                href: COMPANY_LINKEDIN,
                icon: "\u{1F4BC}",
            },
            SocialLink {
                platform: "Twitter",
                href: "https://twitter.com/vextralabs",
                icon: "\u{1F426}",
            },
            SocialLink {
                platform: "GitHub",
                href: "https://github.com/vextralabs",
                icon: "\u{1F419}",
            },
        ],
    },
    contact: Contact {
        title: "Let's talk about your ideas",
        subtitle: "Have a question, feedback, or a collaboration in mind? We're here to help. Drop us a message and the Vextra team will get back to you shortly.",
        email: "hello@vextralabs.com",
        form_title: "\u{1F4DD} Contact Form",
        submit_label: "Send Message",
    },
    seo: Seo {
        title: "Vextra | Create once. Publish everywhere.",
        description: DESCRIPTION,
        keywords: &[
            "content management",
            "AI",
            "social media",
            "creator tools",
            "LinkedIn",
            "publishing",
        ],
    },
};

/// Uppercased first letter of each word, used for avatar placeholders.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
