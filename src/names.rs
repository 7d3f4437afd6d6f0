// Exported file names
pub const SPLIT_BUNDLE_FILE: &str = "quiz.html";
pub const STYLESHEET_FILE: &str = "quiz.css";
pub const SINGLE_FILE_BUNDLE_FILE: &str = "quiz-allinone.html";
pub const SETUP_GUIDE_FILE: &str = "README.txt";

// Bundled assets
pub const RUNTIME_ASSET: &str = "quiz.js";
pub const STYLESHEET_ASSET: &str = "quiz.css";
pub const SETUP_GUIDE_ASSET: &str = "setup-guide.txt";

// Markup hooks shared by the pre-rendered view and the runtime
pub const MOUNT_POINT_ID: &str = "quiz-app-root";
pub const QUIZ_BODY_ID: &str = "quiz-body";
pub const DATA_LITERAL_PREFIX: &str = "const quizData = ";
pub const CONFIG_LITERAL_PREFIX: &str = "const quizConfig = ";

// The only locale the copy is written in
pub const DEFAULT_LOCALE: &str = "ja";
