// Test fixtures - reusable test data
// Weekday selections and the display strings they format to

/// Sample checkbox selections with their Vietnamese display strings
pub mod selections {
    /// Monday through Friday
    pub fn work_week() -> (Vec<&'static str>, &'static str) {
        (
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
            "Thứ Hai - Thứ Sáu",
        )
    }

    /// Two short runs separated by Wednesday
    pub fn split_week() -> (Vec<&'static str>, &'static str) {
        (
            vec!["Monday", "Tuesday", "Thursday", "Friday"],
            "Thứ Hai - Thứ Ba, Thứ Năm - Thứ Sáu",
        )
    }

    /// Every day of the week, listed backwards
    pub fn full_week_reversed() -> (Vec<&'static str>, &'static str) {
        (
            vec![
                "Sunday",
                "Saturday",
                "Friday",
                "Thursday",
                "Wednesday",
                "Tuesday",
                "Monday",
            ],
            "Thứ Hai - Chủ Nhật",
        )
    }

    /// Alternating days, no ranges at all
    pub fn alternating() -> (Vec<&'static str>, &'static str) {
        (
            vec!["Friday", "Monday", "Wednesday"],
            "Thứ Hai, Thứ Tư, Thứ Sáu",
        )
    }

    pub fn all() -> Vec<(Vec<&'static str>, &'static str)> {
        vec![work_week(), split_week(), full_week_reversed(), alternating()]
    }
}

/// Sort canonical names for order-independent comparison
pub fn sorted(names: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    names.sort();
    names
}
