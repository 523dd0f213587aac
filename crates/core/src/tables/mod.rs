//! Static encoding tables.
//!
//! Machine-code generation uses one ordered pattern table per
//! (architecture, language) pair; assembly generation uses one template set
//! per architecture. Declaration order inside a pattern table is the match
//! priority, so entries must never be sorted or deduplicated.

use serde::Serialize;

use crate::model::{Architecture, SourceLanguage};

/// A literal substring and the canned hex bytes emitted when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternEntry {
    pub pattern: &'static str,
    pub hex: &'static str,
}

const fn entry(pattern: &'static str, hex: &'static str) -> PatternEntry {
    PatternEntry { pattern, hex }
}

/// Ordered mapping from pattern to hex byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PatternTable {
    entries: &'static [PatternEntry],
}

impl PatternTable {
    pub fn entries(&self) -> &'static [PatternEntry] {
        self.entries
    }

    /// First entry (in declaration order) whose pattern occurs in `line`.
    ///
    /// Matching is plain substring containment; callers lower-case the line
    /// first. `if` therefore also hits `diff` and `for` hits `format`.
    pub fn lookup(&self, line: &str) -> Option<&'static PatternEntry> {
        self.entries.iter().find(|e| line.contains(e.pattern))
    }
}

static X86_64_C: PatternTable = PatternTable {
    entries: &[
        entry("int main()", "48 89 e5 48 83 ec 10"),
        entry("printf", "48 8d 3d 00 00 00 00 e8 00 00 00 00"),
        entry("return 0", "31 c0 c9 c3"),
        entry("if", "48 85 c0 74 0a"),
        entry("for", "48 89 45 fc eb 0a"),
        entry("while", "48 85 c0 75 f6"),
    ],
};

static X86_64_ASSEMBLY: PatternTable = PatternTable {
    entries: &[
        entry("mov", "48 89"),
        entry("add", "48 01"),
        entry("sub", "48 29"),
        entry("push", "50"),
        entry("pop", "58"),
        entry("call", "e8"),
        entry("ret", "c3"),
    ],
};

static ARM64_C: PatternTable = PatternTable {
    entries: &[
        entry("int main()", "fd 7b bf a9 fd 03 00 91"),
        entry("printf", "00 00 80 52 01 00 00 94"),
        entry("return 0", "00 00 80 52 fd 7b c1 a8 c0 03 5f d6"),
        entry("if", "1f 00 00 71 81 00 00 54"),
        entry("for", "e0 03 00 91 1f 00 00 71"),
        entry("while", "1f 00 00 71 a1 ff ff 54"),
    ],
};

static ARM64_ASSEMBLY: PatternTable = PatternTable {
    entries: &[
        entry("mov", "00 00 80 d2"),
        entry("add", "00 00 00 8b"),
        entry("sub", "00 00 00 cb"),
        entry("ldr", "00 00 40 f9"),
        entry("str", "00 00 00 f9"),
        entry("bl", "00 00 00 94"),
        entry("ret", "c0 03 5f d6"),
    ],
};

/// Pattern table for an architecture/language pair.
pub fn pattern_table(arch: Architecture, lang: SourceLanguage) -> &'static PatternTable {
    match (arch, lang) {
        (Architecture::X86_64, SourceLanguage::C) => &X86_64_C,
        (Architecture::X86_64, SourceLanguage::Assembly) => &X86_64_ASSEMBLY,
        (Architecture::Arm64, SourceLanguage::C) => &ARM64_C,
        (Architecture::Arm64, SourceLanguage::Assembly) => &ARM64_ASSEMBLY,
    }
}

/// Fixed multi-line blocks emitted by the assembly generator.
///
/// Each block already ends with a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssemblyTemplates {
    /// Emitted for lines mentioning `main`.
    pub prologue: &'static str,
    /// Emitted for lines mentioning `printf`.
    pub call: &'static str,
    /// Emitted for lines mentioning `return`.
    pub epilogue: &'static str,
}

static X86_64_TEMPLATES: AssemblyTemplates = AssemblyTemplates {
    prologue: "main:\n    push rbp\n    mov rbp, rsp\n",
    call: "    lea rdi, [rel msg]\n    call printf\n",
    epilogue: "    xor eax, eax\n    leave\n    ret\n",
};

static ARM64_TEMPLATES: AssemblyTemplates = AssemblyTemplates {
    prologue: "main:\n    stp x29, x30, [sp, #-16]!\n    mov x29, sp\n",
    call: "    adrp x0, msg\n    add x0, x0, :lo12:msg\n    bl printf\n",
    epilogue: "    mov w0, #0\n    ldp x29, x30, [sp], #16\n    ret\n",
};

pub fn assembly_templates(arch: Architecture) -> &'static AssemblyTemplates {
    match arch {
        Architecture::X86_64 => &X86_64_TEMPLATES,
        Architecture::Arm64 => &ARM64_TEMPLATES,
    }
}
