//! Keyword fallback responder
//!
//! Used when the knowledge base has no match. Case-insensitive substring
//! matching against fixed keyword sets, in priority order: greeting,
//! farewell, game interest. First match wins.

/// Greeting keywords
const GREETING_KEYWORDS: [&str; 3] = ["привет", "здравствуй", "hello"];
/// Farewell keywords
const FAREWELL_KEYWORDS: [&str; 3] = ["пока", "до свидания", "прощай"];
/// Game interest keyword
const GAME_KEYWORD: &str = "игра";

/// Produce a heuristic reply for a message the knowledge base could not
/// answer. Pure function: no state, no side effects, never fails.
pub fn respond(message: &str) -> String {
    let lowered = message.to_lowercase();

    if GREETING_KEYWORDS.iter().any(|w| lowered.contains(w)) {
        "Привет! Как я могу вам помочь?".to_string()
    } else if FAREWELL_KEYWORDS.iter().any(|w| lowered.contains(w)) {
        "До свидания! Возвращайтесь снова.".to_string()
    } else if lowered.contains(GAME_KEYWORD) {
        "Хотите сыграть в игру 'Угадай число'? Просто скажите 'играть'.".to_string()
    } else {
        "Извините, я не совсем понял ваш вопрос. Можете переформулировать?".to_string()
    }
}
