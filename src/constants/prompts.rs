// Placeholders use `{{name}}` and are filled by `PromptTemplates::render`.

pub const GENERATE_TOPICS_PROMPT: &str = r#"## Instruction
Generate {{count}} high-level topics from the input text below. Each topic must be meaningful on its own and should name one of the main themes of the text.

Reply with JSON in exactly this format and nothing else:
```json
{
  "topics": [
    "topic-1",
    "topic-2",
    "topic-3"
  ]
}
```

## Input text
{{text}}
"#;

pub const GENERATE_MCQ_QUESTIONS_PROMPT: &str = r#"## Instruction
Generate {{count}} multiple choice questions from the input text below. Every question must **strictly belong to one of the provided topics**; do not introduce any other topic.

**The number of questions to create for each topic is given by its `question_count`, and the difficulty by its `level`.**

The topics are provided in this format:
[
  {
    "id": 1,
    "text": "RESTful API Design",
    "question_count": 3,
    "level": "medium"
  },
  {
    "id": 2,
    "text": "Gmail Design Refresh",
    "question_count": 2,
    "level": "easy"
  }
]

`text` is the topic itself and `id` is its unique identifier.

- Each question has between 3 and 5 options.
- Exactly one option is correct, and `correct_option_id` must be the id of that option.
- Option ids are unique within a question.
- Questions should be meaningful, neither trivial nor obscure.
- Every question carries the `topic` object (`id` and `text`) of the topic it belongs to.
- Reply with JSON in exactly this format and nothing else:
```json
{
  "questions": [
    {
      "id": 1,
      "topic": {
        "id": 1,
        "text": "RESTful API Design"
      },
      "type": "mcq",
      "level": "medium",
      "text": "question content here",
      "options": [
        { "id": 1, "text": "option content here" },
        { "id": 2, "text": "option content here" },
        { "id": 3, "text": "option content here" },
        { "id": 4, "text": "option content here" }
      ],
      "correct_option_id": 4
    },
    {
      "id": 2,
      "topic": {
        "id": 2,
        "text": "Gmail Design Refresh"
      },
      "type": "mcq",
      "level": "easy",
      "text": "question content here",
      "options": [
        { "id": 1, "text": "option content here" },
        { "id": 2, "text": "option content here" },
        { "id": 3, "text": "option content here" }
      ],
      "correct_option_id": 1
    }
  ]
}
```

## Topics payload
{{topics}}

## Input text
{{text}}
"#;
