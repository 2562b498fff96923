// src/generator/catalog.rs
//
// 院系配置与课程主题的静态查找表。所有查找都不会失败：
// 未知院系回退到计算机科学，未知课程回退到通用的 8 阶段主题序列。

use crate::models::catalog::{DepartmentConfig, Topic, WeeklyPattern};
use heck::ToTitleCase;
use log::{debug, trace};

static DEPARTMENTS: &[DepartmentConfig] = &[
    DepartmentConfig {
        name: "Computer Science",
        code_prefix: "CS",
        reading_types: &["Textbook Chapter", "Technical Article", "Documentation", "Research Paper"],
        assignment_types: &["Programming Project", "Coding Exercise", "Design Document", "Lab Report"],
        discussion_topics: &[
            "Design Trade-offs",
            "Debugging Strategies",
            "Ethics in Computing",
            "Industry Practices",
        ],
        weekly_pattern: WeeklyPattern::STANDARD,
    },
    DepartmentConfig {
        name: "Mathematics",
        code_prefix: "MATH",
        reading_types: &["Textbook Section", "Worked Examples", "Proof Walkthrough"],
        assignment_types: &["Problem Set", "Proof Exercise", "Applied Modeling Task"],
        discussion_topics: &[
            "Problem-Solving Approaches",
            "Common Misconceptions",
            "Real-World Applications",
        ],
        weekly_pattern: WeeklyPattern::STANDARD,
    },
    DepartmentConfig {
        name: "English",
        code_prefix: "ENG",
        reading_types: &["Primary Text", "Critical Essay", "Style Guide Excerpt"],
        assignment_types: &["Analytical Essay", "Reflective Response", "Peer Review", "Research Proposal"],
        discussion_topics: &["Themes and Motifs", "Author's Craft", "Historical Context"],
        weekly_pattern: WeeklyPattern {
            pages: 1,
            readings: 2,
            discussions: 1,
            assignments: 1,
            quizzes: 0,
        },
    },
    DepartmentConfig {
        name: "History",
        code_prefix: "HIST",
        reading_types: &["Primary Source", "Textbook Chapter", "Historiographical Essay"],
        assignment_types: &["Source Analysis", "Argumentative Essay", "Timeline Project"],
        discussion_topics: &["Causes and Consequences", "Competing Interpretations", "Lessons for Today"],
        weekly_pattern: WeeklyPattern::STANDARD,
    },
    DepartmentConfig {
        name: "Biology",
        code_prefix: "BIO",
        reading_types: &["Textbook Chapter", "Journal Article", "Lab Manual Section"],
        assignment_types: &["Lab Report", "Case Study", "Data Analysis"],
        discussion_topics: &["Experimental Design", "Bioethics", "Current Research"],
        weekly_pattern: WeeklyPattern::STANDARD,
    },
    DepartmentConfig {
        name: "Chemistry",
        code_prefix: "CHEM",
        reading_types: &["Textbook Chapter", "Lab Safety Brief", "Journal Article"],
        assignment_types: &["Problem Set", "Lab Report", "Stoichiometry Worksheet"],
        discussion_topics: &["Reaction Mechanisms", "Chemistry in Daily Life", "Lab Observations"],
        weekly_pattern: WeeklyPattern::STANDARD,
    },
    DepartmentConfig {
        name: "Physics",
        code_prefix: "PHYS",
        reading_types: &["Textbook Chapter", "Derivation Notes", "Simulation Guide"],
        assignment_types: &["Problem Set", "Lab Report", "Simulation Exercise"],
        discussion_topics: &["Physical Intuition", "Estimation Problems", "Modern Applications"],
        weekly_pattern: WeeklyPattern::STANDARD,
    },
    DepartmentConfig {
        name: "Psychology",
        code_prefix: "PSY",
        reading_types: &["Textbook Chapter", "Empirical Study", "Review Article"],
        assignment_types: &["Research Summary", "Experiment Critique", "Reflection Paper"],
        discussion_topics: &["Research Ethics", "Everyday Behavior", "Replication Debates"],
        weekly_pattern: WeeklyPattern::STANDARD,
    },
    DepartmentConfig {
        name: "Business",
        code_prefix: "BUS",
        reading_types: &["Case Study", "Textbook Chapter", "Industry Report"],
        assignment_types: &["Case Analysis", "Business Plan Section", "Market Research Brief"],
        discussion_topics: &["Strategic Decisions", "Stakeholder Perspectives", "Market Trends"],
        weekly_pattern: WeeklyPattern::STANDARD,
    },
    DepartmentConfig {
        name: "Music",
        code_prefix: "MUS",
        reading_types: &["Score Study", "Textbook Chapter", "Listening Guide"],
        assignment_types: &["Composition Exercise", "Analysis Paper", "Performance Recording"],
        discussion_topics: &["Listening Responses", "Performance Practice", "Musical Context"],
        weekly_pattern: WeeklyPattern {
            pages: 1,
            readings: 1,
            discussions: 1,
            assignments: 1,
            quizzes: 1,
        },
    },
];

type TopicTable = &'static [(&'static str, &'static str)];

static COURSE_TOPICS: &[(&str, &str, TopicTable)] = &[
    (
        "Mathematics",
        "Calculus I",
        &[
            ("Limits and Continuity", "Build an intuitive and formal understanding of limits and continuous functions."),
            ("Derivatives and Rules", "Define the derivative and master the power, product, quotient, and chain rules."),
            ("Applications of Derivatives", "Use derivatives to analyze rates of change, related rates, and linear approximation."),
            ("Curve Sketching and Optimization", "Apply first and second derivative tests to sketch curves and solve optimization problems."),
            ("Integrals and Antiderivatives", "Introduce antiderivatives, Riemann sums, and the definite integral."),
            ("Fundamental Theorem of Calculus", "Connect differentiation and integration through the Fundamental Theorem."),
            ("Applications of Integration", "Compute areas, volumes, and accumulated change using integrals."),
            ("Sequences and Series", "Explore convergence of sequences and infinite series."),
        ],
    ),
    (
        "Mathematics",
        "Linear Algebra",
        &[
            ("Systems of Linear Equations", "Solve linear systems with row reduction and echelon forms."),
            ("Matrix Algebra", "Work with matrix operations, inverses, and elementary matrices."),
            ("Determinants", "Compute determinants and interpret them geometrically."),
            ("Vector Spaces", "Study subspaces, bases, and dimension."),
            ("Eigenvalues and Eigenvectors", "Find eigenpairs and diagonalize matrices."),
            ("Orthogonality and Least Squares", "Project onto subspaces and fit data with least squares."),
        ],
    ),
    (
        "Mathematics",
        "Statistics",
        &[
            ("Descriptive Statistics", "Summarize data with measures of center and spread."),
            ("Probability", "Reason about events, conditional probability, and independence."),
            ("Random Variables and Distributions", "Model uncertainty with discrete and continuous distributions."),
            ("Sampling Distributions", "Understand the central limit theorem and sampling variability."),
            ("Confidence Intervals", "Estimate population parameters with quantified uncertainty."),
            ("Hypothesis Testing", "Test claims about populations using p-values and significance levels."),
            ("Regression and Correlation", "Model relationships between quantitative variables."),
        ],
    ),
    (
        "Computer Science",
        "Introduction to Programming",
        &[
            ("Programming Basics", "Write first programs using variables, expressions, and input/output."),
            ("Control Flow", "Direct program execution with conditionals and loops."),
            ("Functions and Decomposition", "Structure programs into reusable, testable functions."),
            ("Collections", "Store and process data with lists, maps, and sets."),
            ("Object-Oriented Design", "Model problems with classes, objects, and encapsulation."),
            ("Error Handling and Testing", "Handle failures gracefully and verify behavior with tests."),
            ("File and Data Processing", "Read, transform, and write structured data."),
            ("Capstone Project", "Integrate course concepts into a complete application."),
        ],
    ),
    (
        "Computer Science",
        "Data Structures",
        &[
            ("Algorithm Analysis", "Measure efficiency with asymptotic notation."),
            ("Arrays and Linked Lists", "Compare contiguous and linked sequential structures."),
            ("Stacks and Queues", "Implement and apply LIFO and FIFO abstractions."),
            ("Trees", "Traverse and balance hierarchical structures."),
            ("Hash Tables", "Achieve fast lookup with hashing and collision resolution."),
            ("Heaps and Priority Queues", "Maintain ordered access to extreme elements."),
            ("Graphs", "Represent networks and search them with BFS and DFS."),
            ("Sorting and Searching", "Analyze classic sorting and searching algorithms."),
        ],
    ),
    (
        "English",
        "Composition I",
        &[
            ("The Writing Process", "Practice prewriting, drafting, revising, and editing."),
            ("Thesis and Argument", "Craft focused claims supported by reasons."),
            ("Evidence and Sources", "Integrate and cite credible evidence."),
            ("Rhetorical Analysis", "Analyze appeals, audience, and purpose."),
            ("Research Writing", "Plan and write a sourced research essay."),
        ],
    ),
    (
        "History",
        "World History",
        &[
            ("Early Civilizations", "Survey the rise of the first cities and states."),
            ("Classical Empires", "Compare the empires of the classical world."),
            ("Medieval Exchanges", "Trace trade, religion, and conflict across Afro-Eurasia."),
            ("Age of Exploration", "Examine global encounters and their consequences."),
            ("Revolutions", "Analyze political and industrial revolutions."),
            ("Imperialism and World Wars", "Study empire, total war, and its aftermath."),
            ("The Contemporary World", "Connect decolonization and globalization to the present."),
        ],
    ),
    (
        "Biology",
        "General Biology",
        &[
            ("The Chemistry of Life", "Review molecules essential to living systems."),
            ("Cell Structure and Function", "Explore organelles, membranes, and transport."),
            ("Cellular Energy", "Follow energy through respiration and photosynthesis."),
            ("Genetics", "Apply Mendelian and molecular genetics."),
            ("Evolution", "Examine natural selection and speciation."),
            ("Ecology", "Study populations, communities, and ecosystems."),
        ],
    ),
    (
        "Psychology",
        "Introduction to Psychology",
        &[
            ("Research Methods", "Learn how psychologists study behavior."),
            ("Biological Bases of Behavior", "Connect the nervous system to thought and action."),
            ("Sensation and Perception", "Investigate how we detect and interpret stimuli."),
            ("Learning and Memory", "Explore conditioning and memory systems."),
            ("Development", "Trace change across the lifespan."),
            ("Social Psychology", "Understand how others shape behavior."),
            ("Psychological Disorders and Treatment", "Survey disorders and evidence-based therapies."),
        ],
    ),
    (
        "Music",
        "Music Theory I",
        &[
            ("Pitch and Notation", "Read and write pitches on the staff."),
            ("Rhythm and Meter", "Count, notate, and perform rhythms in simple and compound meter."),
            ("Scales and Key Signatures", "Construct major and minor scales."),
            ("Intervals", "Identify and build melodic and harmonic intervals."),
            ("Triads and Seventh Chords", "Spell and analyze chords in root position and inversion."),
            ("Harmonic Progression", "Analyze functional harmony and cadences."),
        ],
    ),
    (
        "Music",
        "Music History",
        &[
            ("Medieval and Renaissance Music", "Survey chant, polyphony, and early secular song."),
            ("The Baroque Era", "Study the music of Bach, Handel, and their contemporaries."),
            ("The Classical Era", "Examine form and style in Haydn, Mozart, and early Beethoven."),
            ("The Romantic Era", "Explore expression and nationalism in nineteenth-century music."),
            ("Modernism", "Trace new languages of twentieth-century composition."),
            ("Contemporary Practices", "Consider music in the recorded and digital age."),
        ],
    ),
];

static GENERIC_TOPICS: TopicTable = &[
    ("Fundamentals", "Establish the foundational vocabulary and ideas of the subject."),
    ("Core Concepts", "Develop the central concepts that the rest of the course builds on."),
    ("Analytical Methods", "Practice the methods used to analyze problems in the field."),
    ("Applied Techniques", "Apply techniques to realistic problems and scenarios."),
    ("Case Studies", "Examine detailed cases that illustrate the subject in practice."),
    ("Advanced Topics", "Extend core ideas into more advanced territory."),
    ("Synthesis and Evaluation", "Combine and critically evaluate ideas from across the course."),
    ("Mastery and Integration", "Integrate course learning into a final demonstration of mastery."),
];

fn fallback_department() -> &'static DepartmentConfig {
    &DEPARTMENTS[0]
}

fn find_department(department: &str) -> Option<&'static DepartmentConfig> {
    let wanted = department.trim();
    DEPARTMENTS.iter().find(|d| d.name.eq_ignore_ascii_case(wanted))
}

/// 按院系名查找配置；未知院系静默回退到计算机科学配置 (同一个静态对象)
pub fn resolve_config(department: &str) -> &'static DepartmentConfig {
    match find_department(department) {
        Some(config) => config,
        None => {
            debug!("未知院系 '{}'，回退到 '{}'", department, fallback_department().name);
            fallback_department()
        }
    }
}

/// 返回恰好 `module_count` 个主题。主题表不足时重复使用最后一个主题。
pub fn resolve_topics(department: &str, course_name: &str, module_count: usize) -> Vec<Topic> {
    let dept_name = resolve_config(department).name;
    let course = course_name.trim();
    let table = COURSE_TOPICS
        .iter()
        .find(|(dept, name, _)| *dept == dept_name && name.eq_ignore_ascii_case(course))
        .map(|(_, _, topics)| *topics)
        .unwrap_or_else(|| {
            debug!("课程 '{}' ({}) 没有专属主题表，使用通用主题序列", course, dept_name);
            GENERIC_TOPICS
        });
    trace!("主题表长度 {}，请求模块数 {}", table.len(), module_count);

    (0..module_count)
        .map(|i| {
            let (title, overview) = table[i.min(table.len() - 1)];
            Topic::new(title, overview)
        })
        .collect()
}

/// 规范化院系名：已知院系返回表中名称，未知院系转为标题格式
pub fn normalize_department(department: &str) -> String {
    match find_department(department) {
        Some(config) => config.name.to_string(),
        None => department.trim().to_title_case(),
    }
}

/// 由课程代码前缀推断院系，例如 "MATH101" -> Mathematics
pub fn department_for_code(code: &str) -> Option<&'static DepartmentConfig> {
    let prefix: String = code
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    if prefix.is_empty() {
        return None;
    }
    DEPARTMENTS
        .iter()
        .find(|d| d.code_prefix.eq_ignore_ascii_case(&prefix))
}

pub fn departments() -> &'static [DepartmentConfig] {
    DEPARTMENTS
}

/// 某院系下拥有专属主题表的课程名
pub fn courses_for(department: &str) -> Vec<&'static str> {
    let dept_name = resolve_config(department).name;
    COURSE_TOPICS
        .iter()
        .filter(|(dept, _, _)| *dept == dept_name)
        .map(|(_, name, _)| *name)
        .collect()
}
