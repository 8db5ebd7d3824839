// Canned chatbot replies

use crate::crisis::CountryCrisisProfile;

pub const GREETING: &str = "Hi there! I'm your AI mental health support companion. I'm here to listen, provide support, and help you with coping strategies. How are you feeling today?";

/// Topic triggers (substrings of the lowercased message) and their reply.
/// Checked in order; the first topic with any trigger present wins.
pub const TOPIC_RESPONSES: &[(&[&str], &str)] = &[
    (
        &["anxious", "anxiety"],
        "I understand you're feeling anxious. Anxiety can be overwhelming, but there are techniques that can help. Try the 4-7-8 breathing technique: breathe in for 4 counts, hold for 7, exhale for 8. Would you like me to guide you through some other grounding exercises?",
    ),
    (
        &["sad", "depressed"],
        "I hear that you're feeling sad. It's important to acknowledge these feelings rather than push them away. Sometimes sadness is our mind's way of processing difficult experiences. Have you been able to engage in any activities that usually bring you joy recently?",
    ),
    (
        &["stressed", "stress"],
        "Stress can really take a toll on both our mental and physical health. Let's work on some stress management techniques. Have you tried progressive muscle relaxation or mindfulness meditation? I can guide you through either of these.",
    ),
    (
        &["sleep", "insomnia"],
        "Sleep issues can significantly impact mental health. Good sleep hygiene is crucial. Try establishing a consistent bedtime routine, avoiding screens an hour before bed, and creating a calm environment. Are there specific thoughts keeping you awake at night?",
    ),
    (
        &["thank", "help"],
        "I'm glad I could help! Remember, seeking support is a sign of strength, not weakness. It's wonderful that you're taking steps to care for your mental health. Is there anything specific you'd like to work on or discuss further?",
    ),
];

/// Supportive replies when no topic matches
pub const FALLBACK_RESPONSES: [&str; 4] = [
    "Thank you for sharing that with me. It takes courage to open up about your feelings. Can you tell me more about what's been on your mind lately?",
    "I appreciate you trusting me with your thoughts. Your feelings are valid, and it's important to process them. What's been the most challenging part of your day?",
    "I'm here to listen and support you. Everyone faces difficult times, and you're not alone in this. What kind of support would be most helpful for you right now?",
    "It sounds like you're going through a lot. Remember that it's okay to not be okay sometimes. What are some things that have helped you cope in the past?",
];

/// Reply for a topic match, if any
pub fn topic_response(lower_message: &str) -> Option<&'static str> {
    TOPIC_RESPONSES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| lower_message.contains(t)))
        .map(|(_, reply)| *reply)
}

/// Reply sent when the crisis pass fires. Names the primary contact only.
pub fn crisis_message(profile: &CountryCrisisProfile) -> String {
    let primary = profile.primary_contact();
    format!(
        "I'm very concerned about what you've shared. Your life has value and there are people who want to help. \
        Please consider reaching out to a crisis hotline immediately. \
        In {}, you can call {} for emergencies or {} for {}. \
        Would you like me to help you find more local emergency resources?",
        profile.country_name, profile.emergency_number, primary.number, primary.name
    )
}

/// Multi-line summary of every contact for a country
pub fn crisis_banner(profile: &CountryCrisisProfile) -> String {
    let mut lines = vec![
        format!("Crisis Support Resources - {}", profile.country_name),
        format!("Emergency: {}", profile.emergency_number),
    ];

    for contact in profile.contacts {
        lines.push(format!(
            "{}: {} ({}, {})",
            contact.name, contact.number, contact.channel_type, contact.availability
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crisis::resolve_crisis_contacts;

    #[test]
    fn test_topic_order() {
        // Both anxiety and sleep triggers present; anxiety is checked first
        assert_eq!(
            topic_response("anxiety keeps me from sleep"),
            Some(TOPIC_RESPONSES[0].1)
        );
        assert_eq!(topic_response("insomnia again"), Some(TOPIC_RESPONSES[3].1));
        assert_eq!(topic_response("just checking in"), None);
    }

    #[test]
    fn test_topic_triggers_are_substrings() {
        // "sad" inside "crusade" still triggers the sadness reply
        assert_eq!(topic_response("a crusade"), Some(TOPIC_RESPONSES[1].1));
    }

    #[test]
    fn test_crisis_message_uses_primary_contact() {
        let message = crisis_message(resolve_crisis_contacts("GB"));
        assert!(message.contains("In United Kingdom, you can call 999 for emergencies or 116 123 for Samaritans."));
        assert!(!message.contains("07725 909090"));
    }

    #[test]
    fn test_crisis_banner_lists_all_contacts() {
        let banner = crisis_banner(resolve_crisis_contacts("US"));
        assert!(banner.starts_with("Crisis Support Resources - United States"));
        assert!(banner.contains("Emergency: 911"));
        assert!(banner.contains("Crisis Text Line: 741741 (text, 24/7)"));
        assert_eq!(banner.lines().count(), 5);
    }
}
