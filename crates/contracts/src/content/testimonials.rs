#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The daily checklist and risk guardrails are a game changer.",
        author: "ES futures trader",
    },
    Testimonial {
        quote: "Passed my eval in 12 days\u{2014}coaching kept me consistent.",
        author: "Funded NQ trader",
    },
    Testimonial {
        quote: "The WPF stats panel makes my performance impossible to ignore.",
        author: "NinjaTrader 8 user",
    },
];
