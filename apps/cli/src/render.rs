//! Plain-text output for the terminal.

use std::fmt::Write as _;

use client_core::{
    projection::{mentor_results_summary, star_row},
    MentorCard, StoryCard,
};
use shared::{
    domain::{Mentor, ProfileDetails},
    protocol::BookingConfirmation,
};

pub fn mentors(shown: &[&Mentor], total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", mentor_results_summary(shown.len(), total));
    if shown.is_empty() {
        let _ = writeln!(out, "No mentors found");
        return out;
    }
    for mentor in shown {
        let card = MentorCard::from(*mentor);
        let _ = writeln!(out);
        let verified = if card.verified { " [verified]" } else { "" };
        let _ = writeln!(out, "#{} {}{} - {}", card.id, card.name, verified, card.title);
        let _ = writeln!(
            out,
            "   ★ {:.1} ({} reviews) · {} · {}",
            card.rating, card.reviews, card.experience, card.location
        );
        let mut specialties = card.specialties.join(", ");
        if let Some(more) = card.more_label() {
            specialties.push_str(&format!(" {more}"));
        }
        let _ = writeln!(out, "   {specialties}");
        let _ = writeln!(out, "   {} · {}", card.price, card.availability);
    }
    out
}

pub fn stories(cards: &[StoryCard]) -> String {
    let mut out = String::new();
    if cards.is_empty() {
        let _ = writeln!(out, "No stories found");
        return out;
    }
    for card in cards {
        let _ = writeln!(out, "[{}] {}", card.category.label(), card.title);
        let _ = writeln!(out, "   by {} · {}", card.author_label, card.date);
        let _ = writeln!(out, "   {}", card.content);
        if !card.tags.is_empty() {
            let _ = writeln!(out, "   {}", card.hashtags().join(" "));
        }
        let _ = writeln!(out, "   ♥ {} · {} comments", card.likes, card.comments);
        let _ = writeln!(out);
    }
    out
}

pub fn profile(mentor: &Mentor, details: &ProfileDetails) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", mentor.name, mentor.title);
    let _ = writeln!(
        out,
        "★ {:.1} ({} reviews) · {} · {}",
        mentor.rating, mentor.reviews, mentor.location, mentor.availability
    );
    let _ = writeln!(out, "Specialties: {}", mentor.specialties.join(", "));
    let _ = writeln!(out, "Languages: {}", mentor.languages.join(", "));
    let _ = writeln!(out, "Experience: {}", mentor.experience);
    let _ = writeln!(out, "\n{}", mentor.bio);

    let _ = writeln!(out, "\nSession Types");
    for offer in &details.sessions {
        let _ = writeln!(
            out,
            "  {:<14} {:<12} {}",
            offer.kind.label(),
            offer.duration,
            offer.price
        );
    }

    let _ = writeln!(out, "\nReviews");
    for review in &details.reviews {
        let _ = writeln!(
            out,
            "  {} {} ({})\n    {}",
            review.reviewer,
            star_row(review.stars),
            review.date,
            review.comment
        );
    }

    let _ = writeln!(out, "\nAvailable Time Slots");
    for (index, slot) in details.slots.iter().enumerate() {
        let state = if slot.available { "Available" } else { "Booked" };
        let _ = writeln!(out, "  [{index}] {:<20} {state}", slot.label());
    }
    out
}

pub fn booking(confirmation: &BookingConfirmation) -> String {
    format!(
        "{}\nReference: {}\nSession: {} on {}\n",
        confirmation.notice,
        confirmation.reference,
        confirmation.session.label(),
        confirmation.slot.label()
    )
}

#[cfg(test)]
mod tests {
    use storage::{profile_details_for, SeedStore};

    use super::*;

    #[test]
    fn empty_directory_says_so() {
        let text = mentors(&[], 6);
        assert!(text.starts_with("Showing 0 of 6 mentors"));
        assert!(text.contains("No mentors found"));
    }

    #[test]
    fn mentor_listing_shows_overflow_label() {
        let store = SeedStore::builtin().expect("seed");
        let first = &store.mentors()[0];
        let text = mentors(&[first], 6);
        assert!(text.contains("Showing 1 of 6 mentors"));
        assert!(text.contains("+1 more"));
        assert!(text.contains("[verified]"));
    }

    #[test]
    fn anonymous_story_text_never_names_the_author() {
        let store = SeedStore::builtin().expect("seed");
        let cards: Vec<StoryCard> = store
            .stories()
            .iter()
            .filter(|s| s.is_anonymous)
            .map(StoryCard::from)
            .collect();
        let text = stories(&cards);
        for story in store.stories().iter().filter(|s| s.is_anonymous) {
            if story.author != client_core::ANONYMOUS_AUTHOR {
                assert!(!text.contains(&story.author));
            }
        }
        assert!(text.contains("by Anonymous"));
    }

    #[test]
    fn profile_lists_slots_with_indexes() {
        let store = SeedStore::builtin().expect("seed");
        let mentor = &store.mentors()[0];
        let text = profile(mentor, &profile_details_for(mentor));
        assert!(text.contains("[0] Today 2:00 PM"));
        assert!(text.contains("Booked"));
        assert!(text.contains("Video Call"));
    }
}
