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

use std::panic::{self, AssertUnwindSafe};

use log::{debug, error};
use phonenumber::{Mode, PhoneNumber, Type};

use crate::{
    i18n::RegionCode,
    interfaces::{ParsedNumber, ParserApi},
    phonenorm::{NumberType, errors::ParseAttemptError},
};

/// [`ParserApi`] backed by the `phonenumber` crate and its bundled metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibParser;

impl LibParser {
    pub fn new() -> Self {
        Self
    }

    fn try_parse(&self, raw: &str, region: Option<&str>) -> Result<PhoneNumber, ParseAttemptError> {
        let country = match region {
            Some(code) => Some(
                RegionCode::to_country_id(code)
                    .ok_or_else(|| ParseAttemptError::UnknownRegion(code.to_owned()))?,
            ),
            None => None,
        };

        // The crate has a few unchecked unwraps on odd input
        match panic::catch_unwind(AssertUnwindSafe(|| phonenumber::parse(country, raw))) {
            Ok(Ok(number)) => Ok(number),
            Ok(Err(err)) => Err(ParseAttemptError::Rejected(err.to_string())),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_default();
                Err(ParseAttemptError::Panicked(message))
            }
        }
    }
}

impl ParserApi for LibParser {
    fn parse(&self, raw: &str, region: Option<&str>) -> Option<ParsedNumber> {
        match self.try_parse(raw, region) {
            Ok(number) => Some(snapshot(&number)),
            Err(err @ ParseAttemptError::Panicked(_)) => {
                error!("phonenumber crate panicked while parsing {:?}: {}", raw, err);
                None
            }
            Err(err) => {
                debug!("Parse of {:?} with region {:?} failed: {}", raw, region, err);
                None
            }
        }
    }
}

fn snapshot(number: &PhoneNumber) -> ParsedNumber {
    ParsedNumber {
        e164: number.format().mode(Mode::E164).to_string(),
        international: number.format().mode(Mode::International).to_string(),
        national: number.format().mode(Mode::National).to_string(),
        rfc3966: number.format().mode(Mode::Rfc3966).to_string(),
        country: number.country().id().map(RegionCode::from_country_id),
        national_number: number.national().to_string(),
        extension: number.extension().map(|ext| ext.to_string()),
        valid: phonenumber::is_valid(number),
        number_type: Some(classify(number)),
    }
}

fn classify(number: &PhoneNumber) -> NumberType {
    match number.number_type(&phonenumber::metadata::DATABASE) {
        Type::FixedLine => NumberType::FixedLine,
        Type::Mobile => NumberType::Mobile,
        Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
        Type::TollFree => NumberType::TollFree,
        Type::PremiumRate => NumberType::PremiumRate,
        Type::SharedCost => NumberType::SharedCost,
        Type::Voip => NumberType::VoIP,
        Type::PersonalNumber => NumberType::PersonalNumber,
        Type::Pager => NumberType::Pager,
        Type::Uan => NumberType::UAN,
        Type::Voicemail => NumberType::VoiceMail,
        _ => NumberType::Unknown,
    }
}
