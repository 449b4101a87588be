// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{fmt, sync::Arc};

use log::warn;

use crate::phonenorm::{
    DEFAULT_BLOCKLIST, DEFAULT_REGION_FALLBACKS, PhoneNormOptions, PhoneNormResult,
    normalise_phone,
};

/// Called with every invalid result produced by a [`PhoneField`].
pub type NormalisedCallback = Arc<dyn Fn(&PhoneNormResult) + Send + Sync>;

/// Events a [`PhoneField`] dispatches on its element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Normalisation produced an invalid result.
    Normalised(PhoneNormResult),
    /// The value was rewritten by auto-format.
    Input,
    Change,
}

impl FieldEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FieldEvent::Normalised(_) => "directive:phone:normalised",
            FieldEvent::Input => "input",
            FieldEvent::Change => "change",
        }
    }
}

/// Host interaction that triggers a normalisation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTrigger {
    Input,
    Blur,
}

/// Where a [`PhoneField`] mirrors the latest result.
pub trait PreviewTarget {
    fn set_text(&mut self, text: &str);
    fn set_valid(&mut self, valid: bool);
}

/// The input element a [`PhoneField`] is attached to.
pub trait FieldElement {
    type Preview: PreviewTarget;

    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn dispatch(&mut self, event: FieldEvent);

    /// Finds the preview target registered under `name`, looking in the
    /// element's own form first when the host has one.
    fn lookup_preview(&self, _name: &str) -> Option<Self::Preview> {
        None
    }
}

#[derive(Clone)]
pub struct FieldOptions {
    pub norm: PhoneNormOptions,
    pub auto_format: bool,
    pub format_on_input: bool,
    pub format_on_blur: bool,
    /// Name of the preview target to resolve through the element.
    pub preview: Option<String>,
    pub on_normalised: Option<NormalisedCallback>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            norm: PhoneNormOptions::default(),
            auto_format: false,
            format_on_input: true,
            format_on_blur: true,
            preview: None,
            on_normalised: None,
        }
    }
}

impl fmt::Debug for FieldOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldOptions")
            .field("norm", &self.norm)
            .field("auto_format", &self.auto_format)
            .field("format_on_input", &self.format_on_input)
            .field("format_on_blur", &self.format_on_blur)
            .field("preview", &self.preview)
            .field("on_normalised", &self.on_normalised.is_some())
            .finish()
    }
}

impl FieldOptions {
    /// Fills the blocklist and fallback countries a form field always runs with.
    fn resolved(mut self) -> Self {
        let validation = &mut self.norm.validation;
        if validation.blocklist.is_none() {
            validation.blocklist = Some(DEFAULT_BLOCKLIST.clone());
        }
        if validation.resolve.fallback_countries.is_empty() {
            validation.resolve.fallback_countries =
                DEFAULT_REGION_FALLBACKS.iter().map(|c| c.to_string()).collect();
        }
        self.preview = self
            .preview
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty());
        self
    }
}

/// Normalisation behaviour attached to a form input element.
pub struct PhoneField<E: FieldElement> {
    element: E,
    options: FieldOptions,
    preview: Option<E::Preview>,
}

impl<E: FieldElement> PhoneField<E> {
    /// Attaches to `element` and normalises its current value.
    pub fn mount(element: E, options: FieldOptions) -> Self {
        let options = options.resolved();
        let preview = find_preview(&element, options.preview.as_deref());
        let mut field = Self {
            element,
            options,
            preview,
        };
        let raw = field.element.value();
        field.run(&raw);
        field
    }

    /// Re-resolves options after the host changed them and refreshes the preview.
    pub fn update(&mut self, options: FieldOptions) {
        self.options = options.resolved();
        if let Some(preview) = find_preview(&self.element, self.options.preview.as_deref()) {
            self.preview = Some(preview);
        }
        let result = normalise_phone(&self.element.value(), &self.options.norm);
        self.mirror(&result);
    }

    /// Handles an input or blur on the element.
    ///
    /// Returns `None` when the trigger is not listened to.
    pub fn handle(&mut self, trigger: FieldTrigger) -> Option<PhoneNormResult> {
        let listening = match trigger {
            FieldTrigger::Input => self.options.format_on_input,
            FieldTrigger::Blur => self.options.format_on_blur,
        };
        if !listening {
            return None;
        }

        let raw = self.element.value();
        let result = self.run(&raw);

        if self.options.auto_format {
            if let Some(phone) = result.phone.as_deref().filter(|phone| *phone != raw) {
                self.element.set_value(phone);
                self.element.dispatch(FieldEvent::Input);
                self.element.dispatch(FieldEvent::Change);
            }
        }
        Some(result)
    }

    /// Detaches from the element and hands it back.
    pub fn unmount(self) -> E {
        self.element
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn preview(&self) -> Option<&E::Preview> {
        self.preview.as_ref()
    }

    fn run(&mut self, raw: &str) -> PhoneNormResult {
        let result = normalise_phone(raw, &self.options.norm);
        self.mirror(&result);

        if !result.valid {
            self.element.dispatch(FieldEvent::Normalised(result.clone()));
            if let Some(callback) = &self.options.on_normalised {
                callback(&result);
            }
        }
        result
    }

    fn mirror(&mut self, result: &PhoneNormResult) {
        if let Some(preview) = self.preview.as_mut() {
            preview.set_text(result.phone.as_deref().unwrap_or_default());
            preview.set_valid(result.valid);
        }
    }
}

fn find_preview<E: FieldElement>(element: &E, name: Option<&str>) -> Option<E::Preview> {
    let name = name?;
    let preview = element.lookup_preview(name);
    if preview.is_none() {
        warn!("Preview element not found for {:?}", name);
    }
    preview
}
