//! Standalone page templates.

use crate::model::entity::{BlogPost, GlobalLocation, LocationDesignation, ServiceBlock, TeamMember};
use crate::model::pages::{
    AboutPageContent, BlogPageContent, GlobalPresencePageContent, JoinPageContent,
    ServicesPageContent,
};

const SALES_OFFICE: (&str, &str) = ("Sales & Representation office", "#FAAD14");
const HEADQUARTERS: (&str, &str) = ("Headquarters", "#FF4D4F");
const DEV_CENTER: (&str, &str) = ("Development center", "#95DE64");

fn team_member(order: i64, name: &str, role: &str) -> TeamMember {
    TeamMember {
        id: order.to_string(),
        name: name.into(),
        role: role.into(),
        photo: format!("/team_member_{order}.png"),
        linkedin_url: "#".into(),
        facebook_url: "#".into(),
        twitter_url: "#".into(),
        instagram_url: "#".into(),
        order,
    }
}

impl Default for AboutPageContent {
    fn default() -> Self {
        Self {
            page_title: "About us".into(),
            page_description: "Learn more about Globonexo and our journey to becoming a trusted IT partner.".into(),

            about_superheading: "about us".into(),
            about_heading: "The best IT solution since 2015".into(),
            about_description: "At Globonexo, we implement innovative IT solutions focused on the evolution, adaptation, and growth of your business. Our emphasis on quality, efficiency, and long-term partnerships ensures that every project delivers tangible results and lasting success.".into(),
            about_button_text: "Join now".into(),
            about_button_link: "/join".into(),
            about_image: "/about_us.png".into(),
            about_image_light: "/about_us_light_mode.png".into(),

            story_superheading: "our story".into(),
            story_heading: "The journey and background of the company".into(),
            story_paragraphs: vec![
                "Globonexo was born out of a shared vision between two passionate entrepreneurs in Warsaw, Poland. After countless discussions, deep research, and leveraging our international experience and expertise, we recognised a growing need – businesses across Europe and the U.S. required skilled IT talent to drive innovation, but access to top developers was often limited by local availability and high costs.".into(),
                "This insight prompted us to start Globonexo: a company that unites businesses with global IT talent through strategic outstaffing solutions. From its very beginning, our goal was to bridge the gap between companies and talented engineers with the help of the development services from our Indian, Polish, Ukrainian, and Moldovan centres with high-quality service providers.".into(),
                "Starting as an idea over brainstorming sessions in Warsaw, the company has grown into a firm serving clients from various industries such as automotive, fintech, healthcare, and manufacturing.".into(),
                "Our story at Globonexo is that of collaboration, growth, and global connectivity. We believe that innovation knows no borders, and by empowering companies with the right talent, we help them unlock new possibilities and scale to greater heights.".into(),
                "This is just the beginning – and we're excited to grow alongside our clients, partners, and dedicated team of developers worldwide.".into(),
            ],

            team_superheading: "leadership team".into(),
            team_heading: "Bios and photos of key executives and managers".into(),
            team_description: "Meet the talented individuals who drive our company forward with their expertise and dedication.".into(),
            team_members: vec![
                team_member(1, "Bodih Dgmas", "front-end developer"),
                team_member(2, "Ahmad Errami", "back-end developer"),
                team_member(3, "John Smith", "web designer"),
                team_member(4, "Satoshi Nakamoto", "CEO founder"),
            ],
        }
    }
}

struct PostSeed<'a> {
    title: &'a str,
    category: &'a str,
    date: &'a str,
    read_time: &'a str,
    excerpt: &'a str,
    slug: &'a str,
}

fn blog_post(order: i64, seed: PostSeed<'_>) -> BlogPost {
    BlogPost {
        id: order.to_string(),
        title: seed.title.into(),
        category: seed.category.into(),
        date: seed.date.into(),
        read_time: seed.read_time.into(),
        excerpt: seed.excerpt.into(),
        extended_excerpt: None,
        image: format!("/blog_{order}.png"),
        slug: seed.slug.into(),
        content: None,
        order,
    }
}

impl Default for BlogPageContent {
    fn default() -> Self {
        let mut first = blog_post(1, PostSeed {
            title: "What is digital marketing and why is important?",
            category: "Marketing",
            date: "January 20, 2025",
            read_time: "5 minutes",
            excerpt: "Lorem ipsum, dolor sit amet consectetur adipisicing elit. Explicabo earum id assumenda ad neque recusandae, quasi delenti voluptatum eos vel quas molestias?",
            slug: "what-is-digital-marketing",
        });
        first.extended_excerpt = Some("Explicabo earum id assumenda ad neque recusandae, quasi delenti voluptatum eos vel quas molestias? Lorem ipsum, dolor sit amet consectetur adipisicing elit.".into());

        Self {
            page_title: "Blog".into(),
            page_description: "Stay updated with the latest insights, trends, and news from the IT industry.".into(),
            posts: vec![
                first,
                blog_post(2, PostSeed {
                    title: "The future of AI in software development",
                    category: "Technology",
                    date: "January 15, 2025",
                    read_time: "7 minutes",
                    excerpt: "Discover how artificial intelligence is revolutionizing the way we build and maintain software applications.",
                    slug: "future-of-ai-software-development",
                }),
                blog_post(3, PostSeed {
                    title: "Best practices for remote team management",
                    category: "Management",
                    date: "January 10, 2025",
                    read_time: "6 minutes",
                    excerpt: "Learn effective strategies for managing distributed teams across different time zones and cultures.",
                    slug: "remote-team-management",
                }),
                blog_post(4, PostSeed {
                    title: "Scaling your startup with the right IT infrastructure",
                    category: "Startups",
                    date: "January 5, 2025",
                    read_time: "8 minutes",
                    excerpt: "Essential tips for building a robust and scalable IT infrastructure that grows with your business.",
                    slug: "scaling-startup-it-infrastructure",
                }),
            ],
        }
    }
}

impl Default for ServicesPageContent {
    fn default() -> Self {
        Self {
            page_title: "Software Testing".into(),
            page_breadcrumb: "Software Testing".into(),
            page_description: "Ensure flawless performance with our comprehensive software testing solutions.".into(),
            blocks: vec![
                ServiceBlock {
                    id: "1".into(),
                    superheading: "quality assurance".into(),
                    title: "End-to-End Software Testing Solutions".into(),
                    paragraphs: vec![
                        "Our comprehensive testing services cover every aspect of your software development lifecycle. From unit testing to integration testing, we ensure your applications perform flawlessly under all conditions.".into(),
                        "We employ industry-leading methodologies and tools to identify and eliminate bugs before they reach your users, saving you time and resources while maintaining the highest quality standards.".into(),
                    ],
                    cta_text: "GET STARTED".into(),
                    cta_link: "/contact".into(),
                    image_src: String::new(),
                    image_alt: "Software Testing".into(),
                    is_reversed: false,
                    order: 1,
                },
                ServiceBlock {
                    id: "2".into(),
                    superheading: "automation".into(),
                    title: "Automated Testing for Continuous Delivery".into(),
                    paragraphs: vec![
                        "Accelerate your release cycles with our automated testing solutions. We build robust test suites that integrate seamlessly with your CI/CD pipeline, enabling faster and more reliable deployments.".into(),
                        "Our automation experts work with leading frameworks like Selenium, Cypress, and Playwright to create maintainable and scalable test automation that grows with your application.".into(),
                    ],
                    cta_text: "LEARN MORE".into(),
                    cta_link: "/contact".into(),
                    image_src: String::new(),
                    image_alt: "Automated Testing".into(),
                    is_reversed: true,
                    order: 2,
                },
            ],
        }
    }
}

fn location(id: &str, name: &str, designations: &[(&str, &str)], x: f64, y: f64) -> GlobalLocation {
    GlobalLocation {
        id: id.into(),
        name: name.into(),
        designations: designations
            .iter()
            .map(|(kind, color)| LocationDesignation {
                kind: (*kind).into(),
                color: (*color).into(),
            })
            .collect(),
        x,
        y,
    }
}

impl Default for GlobalPresencePageContent {
    fn default() -> Self {
        Self {
            page_title: "Global Presence".into(),
            page_description: "Explore our international footprint across Europe, India, and North America.".into(),
            locations: vec![
                location("usa", "USA – Boston", &[SALES_OFFICE], 4.8, 44.0),
                location("uk", "United Kingdom – London", &[SALES_OFFICE], 40.3, 31.2),
                location("germany", "Germany – Stuttgart", &[SALES_OFFICE, HEADQUARTERS], 45.0, 35.0),
                location("lithuania", "Lithuania – Vilnius", &[DEV_CENTER], 52.5, 26.0),
                location("latvia", "Latvia – Riga", &[DEV_CENTER], 53.8, 23.0),
                location("poland", "Poland – Warsaw", &[DEV_CENTER], 51.0, 30.0),
                location("czechia", "Czech Republic – Prague", &[DEV_CENTER], 48.0, 34.3),
                location("ukraine", "Ukraine – Kyiv", &[DEV_CENTER], 56.0, 34.0),
                location("moldova", "Moldova – Chisinau", &[DEV_CENTER], 55.0, 37.3),
                location("india", "India – Delhi", &[DEV_CENTER], 79.5, 60.0),
                location("vietnam", "Vietnam – Hanoi", &[DEV_CENTER], 95.3, 76.0),
            ],
        }
    }
}

impl Default for JoinPageContent {
    fn default() -> Self {
        Self {
            page_title: "Join us".into(),
            page_description: "Become part of our global team of IT professionals and work on exciting projects.".into(),
            form_title: "Application Form".into(),
            form_description: "Fill out the form below to apply for a position at Globonexo.".into(),
            success_title: "Application Sent Successfully!".into(),
            success_message: "Thank you for your interest in joining Globonexo. We will review your application and get back to you soon.".into(),
            success_button_text: "Back to home".into(),
            success_button_link: "/".into(),
        }
    }
}
