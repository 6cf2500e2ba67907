//! # Built-in Phrase Table
//!
//! File: cli/src/responder/defaults.rs
//! Author: Christi Mahu
//!
//! The phrase table and fallback used when no config file supplies `[[phrases]]`.
//! Order is significant: the first phrase found in the input wins.
//!

/// Reply used when no phrase matches.
pub const DEFAULT_FALLBACK: &str =
    "I'm not sure how to help with that. Try asking about animal health, feeding, or vaccinations.";

/// Default bot display name.
pub const DEFAULT_BOT_NAME: &str = "VetChat";

/// Default label for the person chatting.
pub const DEFAULT_USER_LABEL: &str = "You";

/// `(phrase, response)` pairs in match order.
///
/// Some later entries are unreachable under first-match-wins: `"goat coughing"`
/// sits behind `"hi"` and `"ideal temperature range for sheep"` behind
/// `"temperature"`.
/// `vetchat phrases --check` lists them.
pub const BUILTIN_PHRASES: &[(&str, &str)] = &[
    ("hello", "Hi there! How can I assist you with your livestock today?"),
    ("hi", "Hello! What would you like help with?"),
    (
        "how are you",
        "I'm just VetChat, your animal health assistant, but I'm well trained and functioning properly!",
    ),
    (
        "disease",
        "You can go to the Diagnosis tab to analyze your animal symptoms.",
    ),
    (
        "vaccination",
        "Vaccination records can be managed in the Dashboard tab.",
    ),
    ("bye", "Goodbye! Monitor your animal health regularly!"),
    (
        "thank you",
        "You're welcome! I'm here to support your livestock needs.",
    ),
    (
        "thanks",
        "Glad I could help! Let me know if you need anything else.",
    ),
    (
        "help",
        "Sure! You can ask about disease, feeding, breeding or medication.",
    ),
    (
        "what can you do",
        "I can help track health, feeding, vaccination, and suggest care tips for your animals.",
    ),
    (
        "symptom checker",
        "Use the 'Diagnosis' tab to enter symptoms and get insights.",
    ),
    (
        "medication",
        "Go to the 'Medication History' section to add or view past treatments.",
    ),
    (
        "health tips",
        "Check daily health tips for your livestock on the Health Tips tab.",
    ),
    (
        "heat detection",
        "Use the 'Breeding Records' to note and monitor heat cycles.",
    ),
    (
        "track health",
        "Go to 'Health Monitoring' for trends and medical logs.",
    ),
    (
        "pasture rotation",
        "Check the 'Feeding & Grazing' tips for best pasture practices.",
    ),
    (
        "temperature",
        "The normal body temperature for a cow is between 101.5°F and 103.5°F (38.6°C - 39.7°C).",
    ),
    (
        "not eating",
        "Loss of appetite may be due to heat stress, illness, pain, poor-quality feed. Diagnose your animal symptoms on the Diagnosis tab.",
    ),
    (
        "deworm",
        "Generally, cattle should be dewormed 2–4 times a year, depending on local parasite load, grazing conditions.",
    ),
    (
        "milk production in my dairy cow?",
        "Ensure proper nutrition (high-quality forage and supplements), regular milking, clean water access, and stress-free housing.",
    ),
    (
        "diet for goats",
        "Goats thrive on a mix of good-quality hay, browse (leaves, twigs), grains, minerals, and clean water. Avoid moldy feed.",
    ),
    (
        "goat coughing",
        "Common causes include respiratory infections (like pneumonia), dusty feed, or lungworms. Isolate and consult a vet.",
    ),
    (
        "vaccinate",
        "Livestock should be vaccinated regularly. Goats should receive the CDT (Clostridium perfringens C & D and tetanus) vaccine initially at 6–8 weeks, with boosters annually.",
    ),
    (
        "sign of pregnancy",
        "Signs include increased appetite, abdominal enlargement, and behavior change. Take proper care of your animal at this time.",
    ),
    (
        "causes of bloating in goats",
        "Rapid consumption of lush legumes, overeating grain, or digestive blockage. Try gentle walking or simethicone. Severe cases need a vet.",
    ),
    (
        "ideal temperature range for sheep",
        "Normal temperature is about 102.3°F (39.1°C), give or take a degree.",
    ),
    (
        "how often should sheep be sheared",
        "At least once a year, typically in spring, to keep them comfortable and avoid overheating.",
    ),
    (
        "what are common diseases in sheep",
        "Foot rot, pneumonia, enterotoxemia (overeating disease), and internal parasites are prevalent. Prevent with vaccines and hygiene.",
    ),
    (
        "how do i treat foot rot in sheep",
        "Trim the hoof, clean the wound, and soak the foot in a zinc sulfate solution. Isolate affected animals.",
    ),
    (
        "why is my sheep limping",
        "Likely causes: foot rot, injuries, or joint infections. Check the hoof for wounds or swelling.",
    ),
    (
        "sick",
        "Please bring the animal for a checkup. What symptoms have you observed?",
    ),
    (
        "fever",
        "Fever may indicate infection. Ensure proper hydration and consult a vet.",
    ),
];
