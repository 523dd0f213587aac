//! Orchestration: holds the current request, runs the three generators on a
//! single convert trigger, and swaps in the new result only when all three
//! succeed.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::catalog::{BinaryExample, CodeExample};
use crate::config::ConverterConfig;
use crate::model::{
    Architecture, BinaryMode, ConversionRequest, ConversionResult, SourceLanguage, TextEncoding,
};
use crate::services::{assembly, binary, machine_code, trim_source};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Please enter some code to convert")]
    EmptyInput,
    #[error("Conversion failed in backend '{backend}': {message}")]
    Backend { backend: String, message: String },
}

/// The seam between the orchestrator and the three conversion functions.
pub trait ConversionBackend {
    fn name(&self) -> &'static str;

    fn machine_code(
        &mut self,
        text: &str,
        arch: Architecture,
        lang: SourceLanguage,
    ) -> Result<String, ConvertError>;

    fn assembly(&mut self, text: &str, arch: Architecture) -> Result<String, ConvertError>;

    fn binary(
        &mut self,
        input: &str,
        mode: BinaryMode,
        encoding: TextEncoding,
        machine_code: Option<&str>,
    ) -> Result<String, ConvertError>;
}

/// Standard backend built on the pattern tables.
///
/// The RNG only feeds the random-byte fallback for unmatched lines.
#[derive(Debug, Clone)]
pub struct PatternBackend<R: Rng = ThreadRng> {
    rng: R,
}

impl PatternBackend<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for PatternBackend<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternBackend<StdRng> {
    /// Reproducible backend: the same seed always yields the same fallback bytes.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> PatternBackend<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ConversionBackend for PatternBackend<R> {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn machine_code(
        &mut self,
        text: &str,
        arch: Architecture,
        lang: SourceLanguage,
    ) -> Result<String, ConvertError> {
        Ok(machine_code::generate_machine_code_with(text, arch, lang, &mut self.rng))
    }

    fn assembly(&mut self, text: &str, arch: Architecture) -> Result<String, ConvertError> {
        Ok(assembly::generate_assembly(text, arch))
    }

    fn binary(
        &mut self,
        input: &str,
        mode: BinaryMode,
        encoding: TextEncoding,
        machine_code: Option<&str>,
    ) -> Result<String, ConvertError> {
        Ok(binary::convert_to_binary(input, mode, encoding, machine_code))
    }
}

/// Holds configuration, input, and the most recent result.
pub struct Converter {
    request: ConversionRequest,
    result: Option<ConversionResult>,
    backend: Box<dyn ConversionBackend>,
}

impl Converter {
    /// Converter over the standard backend with the thread RNG.
    pub fn new() -> Self {
        Self::with_backend(PatternBackend::new())
    }

    pub fn with_backend<B: ConversionBackend + 'static>(backend: B) -> Self {
        Self { request: ConversionRequest::default(), result: None, backend: Box::new(backend) }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn request(&self) -> &ConversionRequest {
        &self.request
    }

    /// Current options as a config value.
    pub fn config(&self) -> ConverterConfig {
        ConverterConfig {
            architecture: self.request.architecture,
            language: self.request.language,
            encoding: self.request.encoding,
            mode: self.request.mode,
        }
    }

    /// Last successful result, if any convert has succeeded yet.
    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn set_input(&mut self, input: impl Into<String>) -> &mut Self {
        self.request.input = input.into();
        self
    }

    pub fn set_architecture(&mut self, arch: Architecture) -> &mut Self {
        self.request.architecture = arch;
        self
    }

    pub fn set_language(&mut self, lang: SourceLanguage) -> &mut Self {
        self.request.language = lang;
        self
    }

    pub fn set_encoding(&mut self, encoding: TextEncoding) -> &mut Self {
        self.request.encoding = encoding;
        self
    }

    pub fn set_mode(&mut self, mode: BinaryMode) -> &mut Self {
        self.request.mode = mode;
        self
    }

    /// Copy every option from `config`; the input text is left alone.
    pub fn apply_config(&mut self, config: &ConverterConfig) -> &mut Self {
        self.request.architecture = config.architecture;
        self.request.language = config.language;
        self.request.encoding = config.encoding;
        self.request.mode = config.mode;
        self
    }

    /// Prefill input and language from a code example.
    pub fn load_code_example(&mut self, example: &CodeExample) -> &mut Self {
        self.request.input = example.code.to_string();
        self.request.language = example.language;
        self
    }

    /// Prefill input and binary mode from a binary example.
    pub fn load_binary_example(&mut self, example: &BinaryExample) -> &mut Self {
        self.request.input = example.code.to_string();
        self.request.mode = example.mode;
        self
    }

    /// Run all three conversions against the current request.
    ///
    /// On any error the previously stored result is kept as-is.
    pub fn convert(&mut self) -> Result<&ConversionResult, ConvertError> {
        let req = &self.request;
        if trim_source(&req.input).is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        let machine_code = self.backend.machine_code(&req.input, req.architecture, req.language)?;
        let assembly = self.backend.assembly(&req.input, req.architecture)?;
        let listing = match req.mode {
            BinaryMode::Machine => Some(machine_code.as_str()),
            BinaryMode::Text | BinaryMode::Numbers => None,
        };
        let binary = self.backend.binary(&req.input, req.mode, req.encoding, listing)?;

        Ok(&*self.result.insert(ConversionResult { machine_code, assembly, binary }))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
