//! Shader preset held by the shader manager.

use log::trace;
use menu_abi::{ShaderManager, ShaderParameter, ShaderPass};

/// Editable shader preset with live and preset parameter tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShaderPreset {
    loaded: bool,
    passes: Vec<ShaderPass>,
    pass_count: usize,
    declared: Vec<ShaderParameter>,
    parameters: Vec<ShaderParameter>,
    preset_parameters: Vec<ShaderParameter>,
}

impl ShaderPreset {
    /// Builds a loaded preset whose pass count equals the number of passes.
    pub fn new(passes: Vec<ShaderPass>, declared: Vec<ShaderParameter>) -> Self {
        let mut preset = Self {
            loaded: true,
            pass_count: passes.len(),
            passes,
            preset_parameters: declared.clone(),
            declared,
            parameters: Vec::new(),
        };
        preset.resolve_parameters();
        preset
    }

    /// Preset with nothing loaded.
    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn with_preset_parameters(mut self, preset_parameters: Vec<ShaderParameter>) -> Self {
        self.preset_parameters = preset_parameters;
        self
    }

    pub fn passes(&self) -> &[ShaderPass] {
        &self.passes
    }

    pub fn parameters(&self) -> &[ShaderParameter] {
        &self.parameters
    }

    pub fn preset_parameters(&self) -> &[ShaderParameter] {
        &self.preset_parameters
    }
}

impl ShaderManager for ShaderPreset {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn pass_mut(&mut self, index: usize) -> Option<&mut ShaderPass> {
        self.passes.get_mut(index)
    }

    fn parameter_mut(&mut self, index: usize) -> Option<&mut ShaderParameter> {
        self.parameters.get_mut(index)
    }

    fn preset_parameter_mut(&mut self, index: usize) -> Option<&mut ShaderParameter> {
        self.preset_parameters.get_mut(index)
    }

    fn pass_count(&self) -> usize {
        self.pass_count
    }

    fn decrement_pass_count(&mut self) {
        self.pass_count = self.pass_count.saturating_sub(1);
    }

    fn resolve_parameters(&mut self) {
        let previous = std::mem::take(&mut self.parameters);
        self.parameters = self
            .declared
            .iter()
            .filter(|param| (param.pass as usize) < self.pass_count)
            .map(|param| {
                previous
                    .iter()
                    .find(|live| live.id == param.id)
                    .cloned()
                    .unwrap_or_else(|| param.clone())
            })
            .collect();
        trace!(
            "shader::resolve_parameters: passes={} parameters={}",
            self.pass_count,
            self.parameters.len()
        );
    }
}
