//! Static copy shown on the landing page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "GOMORRA.AI";

pub const HERO_HEADLINE: &str = "Intelligent Automation";
pub const HERO_SUBHEADLINE: &str = "Business Solutions";
pub const HERO_LEDE: &str = "Transform your customer interactions with AI-powered automation. \
     Generate leads, engage customers, and streamline your CRM workflow.";

pub const CTA_TITLE: &str = "Ready to Transform Your Business?";
pub const CTA_LEDE: &str =
    "Join the AI revolution and stay ahead of the competition. Book a call with our experts today.";
pub const CTA_EMAIL_PLACEHOLDER: &str = "Enter your email";

pub const ABOUT_TITLE: &str = "About Mr Gomorra";
pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut \
     labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco \
     laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in \
     voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit \
     anim id est laborum. Sed ut perspiciatis unde omnis iste natus error sit voluptatem \
     accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae ab illo inventore \
     veritatis et quasi architecto beatae vitae dicta sunt explicabo.",
    "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia \
     consequuntur magni dolores eos qui ratione voluptatem sequi nesciunt. Neque porro quisquam \
     est, qui dolorem ipsum quia dolor sit amet, consectetur, adipisci velit.",
];

pub const PORTRAIT_SRC: &str = "/assets/gomorraphoto01.jpg";
pub const PORTRAIT_ALT: &str = "Mr Gomorra Portrait";

/// Glyph drawn at the top of a feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Brain,
    MessageSquare,
    Database,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: FeatureIcon::Brain,
        title: "AI Chat Agents",
        description: "Advanced conversational AI that understands and responds naturally to your customers",
    },
    Feature {
        icon: FeatureIcon::MessageSquare,
        title: "Lead Generation",
        description: "Automated lead capture and qualification powered by cutting-edge AI",
    },
    Feature {
        icon: FeatureIcon::Database,
        title: "CRM Integration",
        description: "Seamless integration with your existing CRM systems for enhanced workflow",
    },
];
