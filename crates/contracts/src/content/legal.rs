use super::pages::Page;

/// Paragraphs for the legal pages. Empty for every other page.
pub fn legal_notice(page: Page) -> &'static [&'static str] {
    match page {
        Page::Terms => &[
            "Coaching and education are provided for informational purposes only and do not constitute investment advice.",
            "Custom tools are delivered as-is for use on your own licensed NinjaTrader installation.",
            "Sessions may be rescheduled with 24 hours notice.",
        ],
        Page::Privacy => &[
            "We only collect the details you send us by email or through the contact form.",
            "Your information is used to respond to your enquiry and is never sold or shared.",
        ],
        Page::Disclaimer => &[
            "Trading futures involves substantial risk of loss and is not suitable for every investor.",
            "Past performance, including evaluation results, is not indicative of future results.",
            "Never trade with money you cannot afford to lose.",
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_legal_pages_have_notices() {
        for page in Page::all() {
            let is_legal = matches!(page, Page::Terms | Page::Privacy | Page::Disclaimer);
            assert_eq!(!legal_notice(page).is_empty(), is_legal, "{:?}", page);
        }
    }
}
