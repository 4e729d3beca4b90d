//! Static skill vocabulary and learning-path table

use std::collections::HashMap;
use std::sync::LazyLock;

/// Known skill keywords, lower-cased. Matching emits them in title case.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "c++", "c#", "ruby", "go", "rust", "typescript", "php",
    "swift", "kotlin",
    // Web
    "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
    "spring", "bootstrap", "jquery", "ajax", "rest api", "graphql", "webpack", "sass", "less",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite", "firebase",
    "elasticsearch",
    // Data science and ML
    "machine learning", "deep learning", "data science", "data analysis", "numpy", "pandas",
    "scikit-learn", "tensorflow", "pytorch", "keras", "nlp", "computer vision",
    "data visualization",
    // Cloud and devops
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "github", "gitlab",
    "ci/cd", "devops", "linux", "unix", "bash", "terraform", "ansible",
    // Tools
    "jira", "confluence", "figma", "photoshop", "illustrator", "postman", "selenium",
    // Soft skills
    "leadership", "communication", "teamwork", "problem solving", "analytical",
    // Practices
    "agile", "scrum", "oops", "dsa", "algorithm", "testing", "unit testing", "debugging",
];

/// Degree and institution keywords that mark an education line.
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "b.tech", "m.tech", "b.e", "m.e", "bca", "mca", "bsc", "msc",
    "diploma", "degree", "university", "institute", "college",
];

/// Keywords rewarded by the formatting bonus of the resume score.
pub const FORMATTING_KEYWORDS: &[&str] =
    &["project", "achievement", "responsibility", "technology", "framework"];

static LEARNING_PATHS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("react", "Learn React - 2 weeks roadmap: React docs → Components → State → Hooks → Projects"),
        ("python", "Learn Python - 3 weeks roadmap: Syntax → Data Structures → OOP → Django/Flask → Projects"),
        ("java", "Learn Java - 3 weeks roadmap: OOP → Collections → Spring Boot → REST APIs → Projects"),
        ("javascript", "Learn JavaScript - 3 weeks roadmap: ES6 → DOM → Async → Node.js → Projects"),
        ("machine learning", "Learn ML - 4 weeks roadmap: Python → NumPy/Pandas → Scikit-learn → Projects"),
        ("data science", "Learn Data Science - 4 weeks roadmap: Statistics → Python → Pandas → Visualization → ML"),
        ("aws", "Learn AWS - 2 weeks roadmap: EC2 → S3 → Lambda → DynamoDB → Solutions Architect"),
        ("docker", "Learn Docker - 1 week roadmap: Images → Containers → Docker Compose → Kubernetes basics"),
        ("sql", "Learn SQL - 2 weeks roadmap: Queries → Joins → Subqueries → Indexes → Database Design"),
        ("mongodb", "Learn MongoDB - 1 week roadmap: CRUD → Aggregation → Indexing → Atlas → MERN Stack"),
        ("django", "Learn Django - 2 weeks roadmap: Models → Views → Forms → REST → Deployment"),
        ("flask", "Learn Flask - 1 week roadmap: Routes → Templates → SQLAlchemy → REST APIs → Deployment"),
        ("node.js", "Learn Node.js - 2 weeks roadmap: Express → MongoDB → REST → Authentication → Projects"),
        ("angular", "Learn Angular - 2 weeks roadmap: TypeScript → Components → Services → RxJS → Projects"),
        ("vue", "Learn Vue.js - 2 weeks roadmap: Vue 3 → Composition API → Vuex → Router → Projects"),
        ("typescript", "Learn TypeScript - 1 week roadmap: Types → Interfaces → Generics → OOP → React+TS"),
        ("kubernetes", "Learn Kubernetes - 2 weeks roadmap: Pods → Services → Deployments → Helm → Cloud"),
        ("flutter", "Learn Flutter - 3 weeks roadmap: Dart → Widgets → State → Firebase → App Store"),
        ("ios", "Learn iOS - 3 weeks roadmap: Swift → UIKit → SwiftUI → Firebase → App Store"),
        ("android", "Learn Android - 3 weeks roadmap: Kotlin → XML → Jetpack → Firebase → Play Store"),
        ("tensorflow", "Learn TensorFlow - 3 weeks roadmap: Tensors → Models → CNN/RNN → Deployment → Projects"),
        ("pytorch", "Learn PyTorch - 3 weeks roadmap: Tensors → Autograd → Networks → CNN/RNN → Projects"),
        ("nlp", "Learn NLP - 3 weeks roadmap: Text Processing → NLTK → Transformers → BERT → Projects"),
        ("blockchain", "Learn Blockchain - 3 weeks roadmap: Solidity → Smart Contracts → Web3 → DApps → Projects"),
        ("devops", "Learn DevOps - 4 weeks roadmap: Git → Docker → CI/CD → Kubernetes → Cloud → Monitoring"),
        ("data analysis", "Learn Data Analysis - 2 weeks roadmap: Excel → SQL → Python → Pandas → Tableau"),
        ("tableau", "Learn Tableau - 1 week roadmap: Visualizations → Dashboards → Calculations → Stories"),
        ("power bi", "Learn Power BI - 1 week roadmap: Power Query → DAX → Visualizations → Dashboards"),
        ("excel", "Learn Excel - 1 week roadmap: Formulas → VLOOKUP → Pivot Tables → Macros → VBA"),
        ("git", "Learn Git - 1 week roadmap: Init → Add → Commit → Branch → Merge → GitHub → CI/CD"),
    ])
});

/// Roadmap text for a skill, with a generated fallback for unknown skills.
pub fn learning_path(skill: &str) -> String {
    let key = skill.trim().to_lowercase();
    match LEARNING_PATHS.get(key.as_str()) {
        Some(path) => (*path).to_string(),
        None => format!(
            "Learn {} - Check online courses and documentation",
            title_case(skill.trim())
        ),
    }
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
///
/// `node.js` becomes `Node.Js`, `c++` stays `C++`, `ci/cd` becomes `Ci/Cd`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}
