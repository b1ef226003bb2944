//! Prompt builders for the LLM collaborator. The output format each prompt
//! demands mirrors what the recovery parsers accept, so even partially
//! compliant responses remain salvageable.

/// Outline generation. The format requested is the lesson-marker grammar;
/// models that drift into numbered or bold-title lists are still covered by
/// the other outline grammars.
pub fn outline_prompt(topic: &str) -> String {
    format!(
        r#"You are an expert curriculum designer.

Your task is to generate a clear, structured course outline based on the user's topic: **{topic}**.

Tailor the number of lessons to the scope of the topic: a broad topic (e.g. "Python Programming") should be broken into essential subtopics, while a narrow one (e.g. "SQL JOINs") only needs 1-3 in-depth lessons.

Each lesson must include:
1. A short, keyword-based title that contains the topic name, formatted as either `<Subtopic> in <Topic>` or `<Topic>: <Subtopic>`.
2. A one-line summary of what is covered in that lesson.

Avoid generic titles like "Introduction", "Overview" or "Key Concepts"; the titles are used as video search queries, so vague titles return unrelated results.

Output format, strictly:
Lesson 1. <Title>: <one-line summary>
Lesson 2. <Title>: <one-line summary>
... and so on.

Example:
Lesson 1. Variables and Data Types in Python: Learn about strings, integers, floats, booleans, and type conversion.
Lesson 2. Control Flow in Python: Master if-statements, loops, and logical operators.

Now generate the best outline for the following topic: **{topic}**"#
    )
}

/// Standalone markdown lesson body for one outline entry.
pub fn lesson_prompt(title: &str, summary: &str) -> String {
    format!(
        r#"You are an expert technical educator and professional textbook author.

Generate a single, standalone lesson in Markdown that is polished, engaging, and at least 1000 words long (excluding code blocks, tables, and lists).

## Lesson Context
Title: {title}
Summary: {summary}

## Guidelines
1. Begin with a vivid real-world scenario or question, explain why the topic matters, and state 3-5 precise learning objectives as bullet points.
2. Break the content into 4-6 major sections (`## Section Name`) that build from simple to complex, each with 2-3 focused subsections.
3. After introducing a key concept, insert a short "Check Your Understanding" question. Provide at least one vivid analogy per section and a **Warning:** block covering common misconceptions.
4. Include worked examples with step-by-step reasoning for analytical topics, or realistic scenarios and reflective questions for conceptual ones.
5. Use callout blocks (**Note:**, **Tip:**, **Warning:**), fenced code blocks with language labels, and tables for comparisons.
6. Conclude with a recap tied to the learning objectives, 3 annotated further-reading suggestions, and a small action challenge.
7. Write in second person, keep paragraphs to 2-4 sentences, and stay laser-focused on the given Title and Summary.

Do not reference other lessons, external platforms, or hypothetical prerequisites."#
    )
}

/// Quiz generation over a lesson body. Strict JSON is requested; the
/// recovery pipeline handles everything the model does anyway.
pub fn quiz_prompt(num_questions: usize, lesson_content: &str) -> String {
    format!(
        r#"You are an expert AI quiz generator.

Your task is to generate {num_questions} high-quality multiple choice questions (MCQs) from the lesson content below.

Each question must:
- Test understanding of key concepts from the lesson.
- Avoid superficial or overly simplistic questions.
- Include plausible distractors (wrong options).
- Vary in difficulty, with at least one conceptual or application-based question.

Return the result as a valid JSON array, where each question is an object with the following fields:
- "question": the question text
- "options": an array of 4 options (strings)
- "answer": the correct option (must exactly match one of the options)

Example:
[
  {{
    "question": "What is the main purpose of using functions in Python?",
    "options": ["To store data", "To reduce code repetition", "To handle exceptions", "To create classes"],
    "answer": "To reduce code repetition"
  }}
]

IMPORTANT RULES:
- Only output valid JSON - no markdown, no comments, no code blocks.
- Do NOT include trailing commas.
- Do NOT include any text before or after the JSON array.
- Do NOT wrap the output in ```json or any other formatting.
- Your response will be parsed by a program and must strictly be valid JSON.

Lesson Content:
{lesson_content}"#
    )
}

/// Free-text judgement of a user's answer to one question.
pub fn evaluate_answer_prompt(question: &str, options: &[String], answer: &str) -> String {
    // Request validation caps options at 26; saturate anyway so an
    // oversized slice cannot overflow the label byte.
    let formatted_options: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let label = (b'A' + index.min(25) as u8) as char;
            format!("{}. {}", label, option)
        })
        .collect();

    format!(
        "Evaluate the user's answer to a multiple-choice question.\n\n\
         Question:\n{}\n\n\
         Options:\n{}\n\n\
         User's Answer:\n{}\n\n\
         Please provide a brief explanation of whether the answer is correct and why.",
        question,
        formatted_options.join("\n"),
        answer
    )
}
