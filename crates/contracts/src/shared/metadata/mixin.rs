//! Cross-cutting capabilities a model opts into
//!
//! A descriptor lists its mixins; each one applies itself to a
//! `Capabilities` record independently of the others.

use serde::{Deserialize, Serialize};

/// Effective capability set of a model after all mixins are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Object carries a link to an external questionnaire
    pub questionnaire: bool,
    /// Object is owned by an external system and edited there
    pub changeable_externally: bool,
    pub comments_enabled: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            questionnaire: false,
            changeable_externally: false,
            comments_enabled: true,
        }
    }
}

/// One capability module
pub trait ModelCapability {
    fn name(&self) -> &'static str;
    fn apply(&self, caps: &mut Capabilities);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mixin {
    Questionnaire,
    ChangeableExternally,
    DisableAddComments,
}

impl ModelCapability for Mixin {
    fn name(&self) -> &'static str {
        match self {
            Self::Questionnaire => "questionnaire",
            Self::ChangeableExternally => "changeable-externally",
            Self::DisableAddComments => "disable-add-comments",
        }
    }

    fn apply(&self, caps: &mut Capabilities) {
        match self {
            Self::Questionnaire => caps.questionnaire = true,
            Self::ChangeableExternally => caps.changeable_externally = true,
            Self::DisableAddComments => caps.comments_enabled = false,
        }
    }
}

impl Capabilities {
    /// Fold a list of capability modules over the defaults
    pub fn compose<C: ModelCapability>(mixins: &[C]) -> Self {
        let mut caps = Self::default();
        for mixin in mixins {
            mixin.apply(&mut caps);
        }
        caps
    }
}
