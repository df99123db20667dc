// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{map_text, parse_options};
use crate::errors::PipelineResult;
use crate::traits::{ConfigurableProcessor, Processor, ProcessorFault, ProcessorOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    Upper,
    Lower,
    Proper,
    Title,
}

/// Configuration for the Change Text Case processor
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeTextCaseConfig {
    #[serde(rename = "case")]
    pub case_type: CaseType,
}

/// Change Text Case processor - converts text to different cases
#[derive(Debug)]
pub struct ChangeTextCaseProcessor {
    config: ChangeTextCaseConfig,
}

impl ChangeTextCaseProcessor {
    pub fn new(config: ChangeTextCaseConfig) -> Self {
        Self { config }
    }

    pub fn upper() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: CaseType::Upper,
        })
    }

    pub fn lower() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: CaseType::Lower,
        })
    }

    pub fn proper() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: CaseType::Proper,
        })
    }

    pub fn title() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: CaseType::Title,
        })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

fn convert(text: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::Upper => text.to_uppercase(),
        CaseType::Lower => text.to_lowercase(),
        CaseType::Proper => text
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
        CaseType::Title => text
            .split_whitespace()
            .enumerate()
            .map(|(i, word)| {
                let lower_word = word.to_lowercase();
                // small words stay lowercase unless they open the title
                if i == 0
                    || !matches!(
                        lower_word.as_str(),
                        "a" | "an" | "the" | "and" | "or" | "but" | "in" | "on" | "at" | "to"
                            | "for" | "of" | "with" | "by"
                    )
                {
                    capitalize(word)
                } else {
                    lower_word
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

impl Processor for ChangeTextCaseProcessor {
    fn process(&self, input: Value) -> Result<Value, ProcessorFault> {
        map_text(self.name(), input, |text| convert(text, self.config.case_type))
    }

    fn name(&self) -> &str {
        "change_text_case"
    }

    fn as_configurable(&self) -> Option<&dyn ConfigurableProcessor> {
        Some(self)
    }
}

impl ConfigurableProcessor for ChangeTextCaseProcessor {
    fn configure(&self, options: &ProcessorOptions) -> PipelineResult<Arc<dyn Processor>> {
        let config: ChangeTextCaseConfig = parse_options(self.name(), options)?;
        Ok(Arc::new(ChangeTextCaseProcessor::new(config)))
    }
}
