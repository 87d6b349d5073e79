//! Static copy for the marketing page. Sections render straight from these.

use crate::config;

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub struct BillingCycle {
    pub key: &'static str,
    pub label: &'static str,
}

pub struct Plan {
    pub key: &'static str,
    pub name: &'static str,
    pub currency_symbol: &'static str,
    pub price_suffix: &'static str,
    pub prices: &'static [(&'static str, u32)], // cycle key -> amount
    pub features: &'static [&'static str],
    pub cta_label: &'static str,
}

impl Plan {
    pub fn price_for(&self, cycle_key: &str) -> Option<u32> {
        self.prices
            .iter()
            .find(|(key, _)| *key == cycle_key)
            .map(|(_, amount)| *amount)
    }

    pub fn display_price(&self, cycle_key: &str) -> Option<String> {
        self.price_for(cycle_key)
            .map(|amount| format!("{}{} {}", self.currency_symbol, format_inr(amount), self.price_suffix))
    }
}

pub struct IpoCard {
    pub key: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub currency_symbol: &'static str,
    pub price_suffix: &'static str,
    pub description: &'static str,
}

pub struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
}

impl Video {
    pub fn thumbnail(&self) -> String {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", self.id)
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub image: &'static str,
    pub social: Option<&'static str>,
    pub bio: &'static str,
    pub years: u32,
    pub sebi: Option<&'static str>,
}

pub struct RaInfo {
    pub name: &'static str,
    pub sebi_reg_no: &'static str,
    pub address: &'static str,
}

pub const BRAND: &str = "Magnus Hathaway";
pub const LOGO: &str = "/assets/logo.png";

pub const HEADER_LINKS: &[NavLink] = &[
    NavLink { href: "#plans", label: "Plans" },
    NavLink { href: "#about", label: "About RA" },
    NavLink { href: "#faq", label: "FAQ" },
];

pub const HERO_BADGE: &str = "Trusted by 3300+ Clients";
pub const HERO_LINKEDIN: &str = "Connect With Us On LinkedIn";

pub const PLANS_ID: &str = "plans";
pub const PLANS_TITLE: &str = "Stock Recommendations To Elevate Your Portfolio";

pub const BILLING_CYCLES: &[BillingCycle] = &[
    BillingCycle { key: "yearly", label: "Yearly" },
    BillingCycle { key: "halfYearly", label: "Half-yearly" },
    BillingCycle { key: "quarterly", label: "Quarterly" },
];

pub const PLANS: &[Plan] = &[Plan {
    key: "prime",
    name: "Prime",
    currency_symbol: "₹",
    price_suffix: "+ GST",
    prices: &[("yearly", 11999), ("halfYearly", 6999), ("quarterly", 3999)],
    features: &[
        "Messages for when to buy",
        "Messages for when to sell",
        "Messages for partial profit booking",
        "Messages for full profit booking",
        "Research reports for all recommendations",
        "Regular updates on portfolio stocks",
        "Customer care support via email",
        "Quarterly live webinars to solve your queries",
    ],
    cta_label: "Invest Now",
}];

pub const IPO_TITLE: &str = "Top Picks for IPO Success";

pub const IPO_CARDS: &[IpoCard] = &[
    IpoCard {
        key: "ipo-edge",
        name: "IPO Edge",
        price: 9999,
        currency_symbol: "₹",
        price_suffix: "+ GST",
        description: "For every IPO we track, we'll tell you whether to avoid it, apply for listing gains, or apply and hold for the long term.\n\nPlan Type: Mainboard IPOs\nDuration: Yearly\n\nCovers all major IPOs listed on the NSE/BSE mainboard with timely recommendations and guidance.",
    },
    IpoCard {
        key: "ipo-edge-sme-mainboard",
        name: "IPO Edge - SME + Mainboard",
        price: 16950,
        currency_symbol: "₹",
        price_suffix: "+ GST",
        description: "For every IPO we track, we'll tell you whether to avoid it, apply for listing gains, or apply and hold for the long term.\n\nPlan Type: Mainboard + SME IPOs\nDuration: Yearly\n\nIncludes everything in the Mainboard IPO plan, plus detailed coverage of high-potential SME IPOs across sectors.",
    },
];

pub const VIDEOS_TITLE: &str = "DIY Videos";
pub const VIDEOS_DESCRIPTION: &str =
    "Explore our collection of expert videos designed to help you make informed investment decisions.";

pub const VIDEOS: &[Video] = &[
    Video { id: "r5VqQq5fESU", title: "💬 Common Questions", duration: "3:45" },
    Video { id: "IMt8gETvUts", title: "🔄 Frequency Of Recommendations?", duration: "3:45" },
    Video { id: "P_AQuKuDXdk", title: "🎯📊 What's The Advised Range?", duration: "3:45" },
];

pub const FAQ_TITLE: &str = "Frequently Asked Questions";

pub const FAQ_LEFT: &[FaqEntry] = &[
    FaqEntry {
        question: "What services will I receive?",
        answer: "Our platform provides stock recommendations aimed at medium to long-term growth, typically held for 6 - 12 months. In addition, you'll receive high-conviction swing trading calls occasionally, with a shorter holding period of 7 - 30 days. You will also be informed about the correct time to sell your investments and book profits.",
    },
    FaqEntry {
        question: "Other than stock recommendations, is there anything else I will receive?",
        answer: "You'll gain access to timely market updates, insights into trending sectors, and our in-house research reports. You'll also be invited to exclusive webinars, where we explain the reasoning behind our stock picks, when to buy or sell, and highlight key sectors to watch.",
    },
    FaqEntry {
        question: "How will I receive the information?",
        answer: "All information will be delivered directly to your phone via WhatsApp messages under our branding. Stock recommendations come in a standardized format, and you'll be redirected to your brokerage app to place the trade.",
    },
    FaqEntry {
        question: "How can I contact the Research Analyst if I face any issues?",
        answer: "Once you have purchased a plan, log in to the investor portal and use the chat icon on the bottom-right. Our customer care team will get back to you within 24-48 hours.",
    },
    FaqEntry {
        question: "How are the stock weightages determined?",
        answer: "Weightages are allocated to ensure diversification, stability, and growth potential. Adjustments may be made periodically to reflect our latest views on individual stocks and their role in the overall portfolio.",
    },
];

pub const FAQ_RIGHT: &[FaqEntry] = &[
    FaqEntry {
        question: "How much capital is required to begin?",
        answer: "You can start with as little as ₹50,000, and gradually increase your investment over time. We recommend starting with ₹2,00,000 or more to build a diversified portfolio through our recommendations.",
    },
    FaqEntry {
        question: "What is your investment philosophy?",
        answer: "We look for high-quality, high-growth stocks with strong sectoral tailwinds and recommend them at the most opportune time. We focus on fundamentally sound companies, potential turnarounds, and special situations.",
    },
    FaqEntry {
        question: "How will I know when to renew my plan?",
        answer: "You will receive an email notification before your plan expires so that you can renew. You can also opt for auto renewal if you take a recurring subscription payment.",
    },
    FaqEntry {
        question: "Would I lose my current plan if I upgrade to a longer term plan?",
        answer: "No. Purchase the longer term plan now, and your remaining subscription time will be added at the end.",
    },
    FaqEntry {
        question: "Will I get support if I have questions?",
        answer: "For technical queries about broker connection or other issues, reach out to our technical team at magnushathawayinvestments@gmail.com and they will schedule a discussion with you.",
    },
];

pub const TEAM_TITLE: &str = "Meet the RA and Team";

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alireza Azar",
        image: "/assets/team/alireza.png",
        social: Some("https://www.instagram.com/mr.talkstock"),
        bio: "A Chartered Accountant and SEBI Registered Research Analyst with over 12 years in the Indian stock market. His investment philosophy focuses on identifying high-quality, high-growth stocks with a medium to long-term perspective.",
        years: 12,
        sebi: Some("INH000016588"),
    },
    TeamMember {
        name: "Rahul Pandey",
        image: "/assets/team/rahul.png",
        social: Some("https://x.com/Stock_Precision"),
        bio: "A capital markets professional with over a decade of experience in portfolio investing, options writing, and quantitative and fundamental analysis. An NSE Certified Analyst followed by 1,85,000+ people across social media.",
        years: 10,
        sebi: None,
    },
];

pub const FOOTER_NAV: &[NavLink] = &[
    NavLink { label: "Disclaimer", href: "#" },
    NavLink { label: "T&C Magnus Hathaway", href: "#" },
    NavLink { label: "Privacy Policy", href: "#" },
    NavLink { label: "Contact Us", href: "#" },
    NavLink { label: "Investor Charter", href: "#" },
    NavLink { label: "Disclosures", href: "#" },
    NavLink { label: "Grievance Redressal", href: "#" },
];

pub const RA_INFO: RaInfo = RaInfo {
    name: "Alireza Azar",
    sebi_reg_no: "INH000016588",
    address: "904, A Wing, Salarpuria Silverwoods, Varthur Road, CV Raman Nagar, Nagavara Palya, Bengaluru 560093",
};

pub const DISCLAIMERS: &[&str] = &[
    "Investments in securities market are subject to market risks. Read all the security related documents carefully before investing.",
    "Registration granted by SEBI and certification from NISM in no way guarantee performance of the intermediary or provide any assurance of returns to investors.",
];

pub const COPYRIGHT: &str = "Copyright © 2024 All rights reserved";
pub const CREDIT: &str = "Made with ❤️ by AlphaQuark";

/// Plan by key, or the first plan when the key is unknown or missing.
pub fn find_plan(key: Option<&str>) -> Option<&'static Plan> {
    key.and_then(|key| PLANS.iter().find(|plan| plan.key == key))
        .or_else(|| PLANS.first())
}

/// Cycle to seed the dialog with: the one the user clicked, else whatever the
/// form already holds, else the first listed cycle.
pub fn initial_cycle(explicit: Option<&str>, stored: Option<&str>) -> String {
    explicit
        .or(stored)
        .or_else(|| BILLING_CYCLES.first().map(|cycle| cycle.key))
        .unwrap_or(config::DEFAULT_CYCLE_KEY)
        .to_string()
}

/// Indian digit grouping: last three digits, then pairs (1,85,000).
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_indian_grouping() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(3999), "3,999");
        assert_eq!(format_inr(11999), "11,999");
        assert_eq!(format_inr(185000), "1,85,000");
        assert_eq!(format_inr(20000000), "2,00,00,000");
    }

    #[test]
    fn plan_prices_per_cycle() {
        let prime = find_plan(Some("prime")).unwrap();
        assert_eq!(prime.price_for("halfYearly"), Some(6999));
        assert_eq!(prime.price_for("monthly"), None);
        assert_eq!(prime.display_price("yearly").as_deref(), Some("₹11,999 + GST"));
    }

    #[test]
    fn unknown_plan_falls_back_to_first() {
        assert_eq!(find_plan(Some("gold")).map(|p| p.key), Some("prime"));
        assert_eq!(find_plan(None).map(|p| p.key), Some("prime"));
    }

    #[test]
    fn initial_cycle_precedence() {
        assert_eq!(initial_cycle(Some("quarterly"), Some("halfYearly")), "quarterly");
        assert_eq!(initial_cycle(None, Some("halfYearly")), "halfYearly");
        assert_eq!(initial_cycle(None, None), "yearly");
    }
}
