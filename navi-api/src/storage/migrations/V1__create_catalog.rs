/// Create plans, functions and questions with the question/plan link table
pub fn migration() -> String {
    r#"
CREATE TABLE plans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    price REAL NOT NULL,
    features TEXT NOT NULL DEFAULT '[]'
);

CREATE TABLE functions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    az TEXT UNIQUE,
    en TEXT UNIQUE,
    ru TEXT UNIQUE
);

CREATE TABLE questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    function_id INTEGER NOT NULL,
    az TEXT NOT NULL,
    en TEXT NOT NULL,
    ru TEXT NOT NULL,
    priority INTEGER NOT NULL DEFAULT 1,
    FOREIGN KEY (function_id) REFERENCES functions (id) ON DELETE CASCADE
);

CREATE TABLE question_plans (
    question_id INTEGER NOT NULL,
    plan_id INTEGER NOT NULL,
    PRIMARY KEY (question_id, plan_id),
    FOREIGN KEY (question_id) REFERENCES questions (id) ON DELETE CASCADE,
    FOREIGN KEY (plan_id) REFERENCES plans (id) ON DELETE CASCADE
);

CREATE INDEX idx_questions_function
    ON questions(function_id);

CREATE INDEX idx_question_plans_plan
    ON question_plans(plan_id);
"#
    .to_string()
}
