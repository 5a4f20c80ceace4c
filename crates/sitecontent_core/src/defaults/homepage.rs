//! Homepage section templates.

use crate::model::entity::{
    FaqColumn, FaqItem, ServiceCard, SocialLink, StatCard, Testimonial, WhyChooseCard,
};
use crate::model::homepage::{
    AboutContent, ContactContent, ContactInfo, FaqContent, HeroContent, ServicesContent,
    TestimonialsContent, WhyChooseUsContent,
};

const PLACEHOLDER_QUOTE: &str = "«Lorem ipsum dolor sit amet consectetur adipisicing elit. Sit, labore dolore laborum dolorum culpa ducimus ipsam quo, veniam animi pariatur facilis tempora incidunt nostrum quisquam, cum quasi laudantium? Voluptates, sequi?»";

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            heading_line1: "International".into(),
            heading_line1_highlight: "IT & Expert Hub".into(),
            heading_line2: "For Your".into(),
            heading_line2_highlight: "Universal Success".into(),
            description: "Globonexo is an international IT consulting company committed to helping European businesses grow faster and stronger. Our team of industry experts drives innovation and delivers IT solutions as a trusted strategic partner.".into(),
            primary_button_text: "Enquire Now".into(),
            primary_button_link: "/contact".into(),
            secondary_button_text: "Schedule a Consultation".into(),
            secondary_button_link: "/contact".into(),
            trust_label: "Trusted by businesses of all sizes worldwide".into(),
            trusted_companies: [
                "Microsoft",
                "Google",
                "Amazon",
                "SAP",
                "Siemens",
                "BMW",
                "Bosch",
                "Deutsche Bank",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

fn service_card(order: i64, icon: &str, title: &str, description: &str) -> ServiceCard {
    ServiceCard {
        id: order.to_string(),
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
        is_green_title: order == 1,
        learn_more_link: "#".into(),
        order,
    }
}

impl Default for ServicesContent {
    fn default() -> Self {
        Self {
            superheading: "our services".into(),
            heading: "What we're offering".into(),
            description: "At Globonexo, we empower European enterprises with strategic IT solutions that foster innovation, efficiency, and trust. Our experienced consultants work hand-in-hand with clients to accelerate their growth and strengthen their competitive edge.".into(),
            cards: vec![
                service_card(1, "🐞", "Software Testing Services", "Ensure flawless performance with our end-to-end software testing solutions. From manual to automated testing, we help you deliver reliable, high-quality software with confidence."),
                service_card(2, "🚀", "IT Solutions for Startups", "Accelerate your startup's growth with our customized IT services — from MVP development to scaling your tech infrastructure. We turn ideas into impactful digital products."),
                service_card(3, "📈", "Flexibility and Scalability", "Scale your team effortlessly with our flexible engagement models. We help you adapt to changing project requirements while ensuring optimal efficiency and cost-effectiveness."),
                service_card(4, "🤝", "Cultural and Technical Alignment", "We bridge global talent with your local business needs, ensuring seamless collaboration, smooth communication, and technically aligned delivery across borders."),
                service_card(5, "🧑‍💻", "Outstaffing Solutions", "Access top-tier IT talent through our comprehensive outstaffing services. Build and scale your development team efficiently with skilled professionals who fit your culture and goals."),
            ],
        }
    }
}

fn stat(order: i64, value: &str, label: &str) -> StatCard {
    StatCard {
        id: order.to_string(),
        value: value.into(),
        label: label.into(),
        order,
    }
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            superheading: "about us".into(),
            heading: "The Best IT Solution Since 2015".into(),
            paragraphs: vec![
                "At Globonexo, we implement innovative IT solutions focused on the evolution, adaptation, and growth of your business.".into(),
                "Our emphasis on quality, efficiency, and long-term partnerships ensures that every project delivers tangible results and lasting success.".into(),
            ],
            button_text: "Join now".into(),
            button_link: "/join".into(),
            stats: vec![
                stat(1, "9", "countries"),
                stat(2, "3", "continents"),
                stat(3, "320", "IT talents in our pool"),
                stat(4, "15", "industries"),
            ],
        }
    }
}

fn why_card(order: i64, icon: &str, title: &str, description: &str) -> WhyChooseCard {
    WhyChooseCard {
        id: order.to_string(),
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
        order,
    }
}

impl Default for WhyChooseUsContent {
    fn default() -> Self {
        Self {
            superheading: "why choose us".into(),
            heading: "Why Our Clients Choose Globonexo".into(),
            description: "We enable seamless collaboration by deploying cutting-edge technologies and refined IT solutions, helping businesses strengthen their competitive edge in today's market. With a firm commitment to quality, innovation, and customer satisfaction, we help our clients achieve their goals faster, smarter, and more efficiently.".into(),
            cards: vec![
                why_card(1, "💼", "Built on Competence", "With deep technical knowledge and extensive experience from our founders and team members, we deliver results that align perfectly with your goals."),
                why_card(2, "🌍", "Global Talent Pool", "Gain access to a vast pool of high-class IT specialists from India and Eastern Europe — skilled professionals ready to bring your ideas to life."),
                why_card(3, "⚖️", "Cost Efficiency", "Optimize your IT operations, reduce costs, and never compromise on quality or timely delivery."),
                why_card(4, "📈", "Flexibility and Scalability", "Elastically scale your team according to project needs while maintaining agility and control."),
                why_card(5, "🧑‍💻", "Cultural and Technical Alignment", "We bridge global talent with local business needs, ensuring seamless communication, collaboration, and execution across projects."),
            ],
        }
    }
}

fn testimonial(order: i64, name: &str, title: &str) -> Testimonial {
    Testimonial {
        id: order.to_string(),
        quote: PLACEHOLDER_QUOTE.into(),
        name: name.into(),
        title: title.into(),
        order,
    }
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            superheading: "testimonials".into(),
            heading: "Customers Testimonials".into(),
            description: "Hear What Our Customers Say About Partnering with Globonexo!".into(),
            testimonials: vec![
                testimonial(1, "Satya Nadella", "Chief Executive Officer, Microsoft"),
                testimonial(2, "Andy Jassy", "Chief Executive Officer, Amazon"),
                testimonial(3, "Sundar Pichai", "Chief Executive Officer, Alphabet (Google)"),
                testimonial(4, "Tim Cook", "Chief Executive Officer, Apple"),
            ],
        }
    }
}

fn faq(id: u32, column: FaqColumn, order: i64, question: &str, answer: &str) -> FaqItem {
    FaqItem {
        id: id.to_string(),
        question: question.into(),
        answer: answer.into(),
        column,
        order,
    }
}

impl Default for FaqContent {
    fn default() -> Self {
        use FaqColumn::{Left, Right};

        Self {
            superheading: "faq".into(),
            heading: "Frequently Asked Questions".into(),
            description: "Got Questions? We've Got Answers to Help You Understand Globonexo Better!".into(),
            items: vec![
                faq(1, Left, 1, "Can we choose and interview developers ourselves?", "Yes, you have full control over the selection process. We provide you with pre-vetted candidates, and you can interview them to ensure they meet your specific requirements before making a decision."),
                faq(2, Left, 2, "How do you ensure developer quality and productivity?", "We have a rigorous vetting process that includes technical assessments, code reviews, and soft skills evaluation. We also provide ongoing performance monitoring and regular check-ins to ensure consistent quality."),
                faq(3, Left, 3, "What is IT & AI outstaffing and how does it differ from outsourcing?", "IT & AI outstaffing means you hire dedicated developers who work exclusively for you while we handle HR and administrative tasks. Unlike outsourcing, you maintain direct control over the team and their work."),
                faq(4, Left, 4, "How do you select the developers we will work with?", "We match developers based on your technical requirements, project needs, and cultural fit. Our talent pool includes pre-vetted professionals with diverse skills and experience levels."),
                faq(5, Right, 1, "What tech stacks do your developers use?", "Our developers are proficient in a wide range of technologies including React, Angular, Vue.js, Node.js, Python, Java, .NET, AWS, Azure, and many more. We can match expertise to your specific stack."),
                faq(6, Right, 2, "How is outstaffing priced?", "Our pricing is transparent and competitive. You pay a monthly rate per developer that covers their salary, benefits, workspace, and our management fee. No hidden costs or surprises."),
                faq(7, Right, 3, "How does your pricing compare to other outstaffing providers?", "We offer competitive rates while maintaining high quality. Our pricing reflects the value of our rigorous vetting process, ongoing support, and access to top-tier talent from India and Eastern Europe."),
                faq(8, Right, 4, "Do you offer a trial period?", "Yes, we offer flexible trial periods so you can evaluate our developers before committing to a long-term engagement. This ensures you find the perfect fit for your team."),
            ],
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "contact.global@globonexo.com".into(),
            phone: "+49 711 123456".into(),
            phone2: "+49 711 123456".into(),
            address: "Headquarters: Koenigstr. 10c, 70173 Stuttgart, Germany".into(),
        }
    }
}

fn social(order: i64, icon: &str, alt: &str) -> SocialLink {
    SocialLink {
        id: order.to_string(),
        icon: icon.into(),
        alt: alt.into(),
        href: "#".into(),
        order,
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            superheading: "contact".into(),
            heading: "Contact us for Any Questions".into(),
            description: "Let's Connect and Find the Right Solutions for You!".into(),
            contact_card_title: "Contact Info".into(),
            contact_info: ContactInfo::default(),
            social_links: vec![
                social(1, "/instagram.png", "Instagram"),
                social(2, "/twitter.png", "Twitter"),
                social(3, "/facebook.png", "Facebook"),
                social(4, "/youtube.png", "YouTube"),
            ],
        }
    }
}
