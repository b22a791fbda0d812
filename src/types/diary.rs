use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

impl Mood {
    pub fn marker(self) -> &'static str {
        match self {
            Mood::Positive => "+",
            Mood::Neutral => "~",
            Mood::Negative => "-",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiaryEntry {
    pub day: u32,
    pub date: NaiveDate,
    pub entry: String,
    pub mood: Mood,
}

impl DiaryEntry {
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_matches_journal_style() {
        let entry = DiaryEntry {
            day: 1,
            date: NaiveDate::from_ymd_opt(2024, 11, 2).expect("valid date"),
            entry: "Started".to_string(),
            mood: Mood::Positive,
        };
        assert_eq!(entry.display_date(), "Nov 2, 2024");
    }
}
