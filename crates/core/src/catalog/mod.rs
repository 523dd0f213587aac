//! Bundled example payloads used to prefill the input and options.

use serde::Serialize;

use crate::model::{BinaryMode, SourceLanguage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeExample {
    pub name: &'static str,
    pub code: &'static str,
    pub language: SourceLanguage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BinaryExample {
    pub name: &'static str,
    pub code: &'static str,
    pub mode: BinaryMode,
}

pub static CODE_EXAMPLES: &[CodeExample] = &[
    CodeExample {
        name: "Hello World (C)",
        code: "#include <stdio.h>\n\nint main() {\n    printf(\"Hello, World!\");\n    return 0;\n}",
        language: SourceLanguage::C,
    },
    CodeExample {
        name: "Simple Loop (C)",
        code: "int main() {\n    for (int i = 0; i < 10; i++) {\n        printf(\"%d\", i);\n    }\n    return 0;\n}",
        language: SourceLanguage::C,
    },
    CodeExample {
        name: "Assembly Instructions",
        code: "mov rax, 1\nadd rax, 2\nsub rax, 1\nret",
        language: SourceLanguage::Assembly,
    },
];

pub static BINARY_EXAMPLES: &[BinaryExample] = &[
    BinaryExample { name: "Hello World Text", code: "Hello, World!", mode: BinaryMode::Text },
    BinaryExample { name: "Numbers to Binary", code: "42\n255\n1024", mode: BinaryMode::Numbers },
    BinaryExample { name: "Unicode Text", code: "Hello 世界 🌍", mode: BinaryMode::Text },
];

/// Case-insensitive lookup by example name.
pub fn find_code_example(name: &str) -> Option<&'static CodeExample> {
    let name = name.trim();
    CODE_EXAMPLES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

pub fn find_binary_example(name: &str) -> Option<&'static BinaryExample> {
    let name = name.trim();
    BINARY_EXAMPLES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}
