use anyhow::{bail, Result};
use std::io::{BufRead, Write};

use crate::assessment::{questions, Question, ResponseSet};
use crate::prompt::Prompter;
use crate::scoring::Dosha;

/// Interpret a typed answer: an option number, a dosha initial, or a dosha name.
pub fn parse_choice(input: &str) -> Option<Dosha> {
    match input.trim().to_lowercase().as_str() {
        "1" | "v" | "vata" => Some(Dosha::Vata),
        "2" | "p" | "pitta" => Some(Dosha::Pitta),
        "3" | "k" | "kapha" => Some(Dosha::Kapha),
        _ => None,
    }
}

fn ask_question<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    question: &Question,
    number: usize,
    total: usize,
) -> Result<Dosha> {
    prompter.say("")?;
    prompter.say(&format!("[{}/{}] {}", number, total, question.section))?;
    prompter.say(question.prompt)?;
    for (i, option) in question.options.iter().enumerate() {
        prompter.say(&format!("  {}) {}", i + 1, option.label))?;
    }

    loop {
        match prompter.ask("Your answer (1-3): ")? {
            Some(input) => match parse_choice(&input) {
                Some(dosha) => {
                    if let Some(option) = question.option_for(dosha.as_str()) {
                        prompter.say(&format!("  -> {}", option.label))?;
                    }
                    return Ok(dosha);
                }
                None => prompter.say("  Please select an answer.")?,
            },
            None => bail!(
                "Input ended at question {} of {}; the assessment was not submitted",
                number,
                total
            ),
        }
    }
}

/// Walk through every question and collect an answer for each.
///
/// Every question must be answered; invalid input is asked again.
pub fn run_quiz<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<ResponseSet> {
    let all = questions();
    prompter.say("Prakriti Assessment")?;
    prompter.say(&format!(
        "Answer {} questions by choosing the option that fits you best.",
        all.len()
    ))?;

    let mut responses = ResponseSet::new();
    for (i, question) in all.iter().enumerate() {
        let dosha = ask_question(prompter, question, i + 1, all.len())?;
        responses.insert(question.id, dosha.as_str());
    }
    Ok(responses)
}
