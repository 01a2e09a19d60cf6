//! Prompt constants for the generate endpoint.

use crate::generate::normalizer::InterviewParams;

/// Question-generation prompt template. The output constraints exist because
/// the questions are read aloud by a voice assistant: no special characters,
/// and a bare JSON array so the reply parses without post-processing.
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Prepare questions for a job interview.
The job role is {role}.
The job experience level is {level}.
The tech stack used in the job is: {techstack}.
The focus between behavioural and technical questions should lean towards: {type}.
The amount of questions required is: {amount}.
Please return only the questions, without any additional text.
The questions are going to be read by a voice assistant so do not use "/" or "*" or any other special characters.
Return the questions formatted like this: ["Question 1", "Question 2"]"#;

/// Renders the question prompt for one request. The raw comma-separated
/// techstack is embedded as sent, not the split list.
pub fn interview_questions_prompt(params: &InterviewParams) -> String {
    QUESTIONS_PROMPT_TEMPLATE
        .replace("{role}", &params.role)
        .replace("{level}", &params.level)
        .replace("{techstack}", &params.techstack)
        .replace("{type}", &params.interview_type)
        .replace("{amount}", &params.amount)
}
