// System instruction sent with every completion request

use chrono::NaiveDate;

/// Fixed financial-assistant instruction with the current date embedded.
pub fn system_prompt(today: NaiveDate) -> String {
    format!(
        "You are a financial assistant specializing in bill management. STRICT RULES:\n\
         1. Format responses clearly:\n\
         \x20  - Payment Name\n\
         \x20  - Due Date (MM/DD/YYYY)\n\
         \x20  - Amount Due\n\
         \x20  - Payment Methods\n\
         2. Include reminders 3 days before due dates\n\
         3. Highlight overdue payments in red\n\
         4. Suggest payment optimization strategies\n\
         5. Current date: {}\n\
         6. Use financial emojis: 💸💳📅⚠️✅\n\
         7. Never use markdown",
        today.format("%m/%d/%Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_current_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        let prompt = system_prompt(today);
        assert!(prompt.contains("Current date: 08/05/2026"));
    }

    #[test]
    fn test_prompt_states_formatting_rules() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let prompt = system_prompt(today);
        assert!(prompt.contains("bill management"));
        assert!(prompt.contains("Due Date (MM/DD/YYYY)"));
        assert!(prompt.contains("Never use markdown"));
    }
}
