use crate::error::Result;
use crate::types::diary::{DiaryEntry, Mood};
use crate::types::scenario::{Outcome, Scenario};
use crate::types::task::{Impact, Routine, Todo};
use chrono::NaiveDate;

pub const HERO_VIDEO: &str = "/hero-video.mp4";

pub fn todos() -> Vec<Todo> {
    let mut todos = vec![
        Todo::new("1", "Complete morning workout", Impact::High),
        Todo::new("2", "Learn a new skill for 30 minutes", Impact::High),
        Todo::new("3", "Read 20 pages of a book", Impact::Medium),
        Todo::new("4", "Call a friend or family member", Impact::Medium),
        Todo::new("5", "Plan tomorrow's priorities", Impact::Low),
    ];
    todos[2].completed = true;
    todos
}

pub fn routines() -> Vec<Routine> {
    [
        ("1", "Morning Meditation", 12, true, Impact::High),
        ("2", "Drink 8 glasses of water", 8, false, Impact::Medium),
        ("3", "Journal writing", 5, true, Impact::High),
        ("4", "Evening walk", 15, false, Impact::Medium),
    ]
    .into_iter()
    .map(|(id, name, streak, completed_today, impact)| Routine {
        id: id.to_string(),
        name: name.to_string(),
        streak,
        completed_today,
        impact,
    })
    .collect()
}

pub fn scenarios() -> Result<Vec<Scenario>> {
    [
        ("1", "You land your dream job and start a fulfilling career", Outcome::Positive, 75),
        ("2", "You develop a strong network of professional connections", Outcome::Positive, 68),
        ("3", "You achieve your fitness and health goals", Outcome::Positive, 82),
        ("4", "You start a side project that gains traction", Outcome::Positive, 55),
        ("5", "You fall into old habits and lose motivation", Outcome::Negative, 25),
        ("6", "You face unexpected financial challenges", Outcome::Negative, 18),
        ("7", "You struggle with work-life balance", Outcome::Negative, 30),
    ]
    .into_iter()
    .map(|(id, text, outcome, probability)| Scenario::new(id, text, outcome, probability))
    .collect()
}

pub fn diary() -> Vec<DiaryEntry> {
    [
        (1, 12, "Started my journey today. Feeling excited but nervous about the changes ahead. Set up my daily routines and goals.", Mood::Positive),
        (2, 13, "Completed my morning meditation and workout. Already feeling more energized. The small wins are building momentum.", Mood::Positive),
        (3, 14, "Had a challenging day at work, but stuck to my evening routine. Learning that consistency matters more than perfection.", Mood::Neutral),
        (4, 15, "Connected with an old friend today. Realized how much personal growth I've experienced. Grateful for this journey.", Mood::Positive),
        (5, 16, "Struggled with motivation today. Skipped my workout but made sure to journal. Tomorrow is a fresh start.", Mood::Negative),
        (6, 17, "Back on track! Completed all my tasks and routines. The key is not letting one bad day derail everything.", Mood::Positive),
    ]
    .into_iter()
    .filter_map(|(day, november, entry, mood)| {
        NaiveDate::from_ymd_opt(2024, 11, november).map(|date| DiaryEntry {
            day,
            date,
            entry: entry.to_string(),
            mood,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_scenarios_are_valid_and_unique() {
        let scenarios = scenarios().expect("seed scenarios should be valid");
        assert_eq!(scenarios.len(), 7);
        let mut ids: Vec<_> = scenarios.iter().map(|scenario| scenario.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn only_the_reading_todo_starts_completed() {
        let completed: Vec<_> = todos()
            .into_iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.id)
            .collect();
        assert_eq!(completed, vec!["3".to_string()]);
    }

    #[test]
    fn diary_covers_six_consecutive_days() {
        let diary = diary();
        assert_eq!(diary.len(), 6);
        assert_eq!(diary[0].display_date(), "Nov 12, 2024");
        assert_eq!(diary[5].display_date(), "Nov 17, 2024");
    }
}
