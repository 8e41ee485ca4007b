//! The show/hide toggle.

use crate::handles::{ContentBlock, TriggerControl};
use crate::labels::{Label, TriggerLabels};
use crate::visibility::Visibility;

/// The next state and the label that must accompany it.
pub fn transition(current: Visibility, labels: &TriggerLabels) -> (Visibility, &Label) {
    let next = current.toggled();
    (next, labels.for_visibility(next))
}

/// Flip the block between hidden and shown and relabel the trigger to match.
///
/// Returns the new state, or `None` without touching anything when either
/// handle is missing.
pub fn toggle_example<B, T>(
    block: Option<&mut B>,
    trigger: Option<&mut T>,
    labels: &TriggerLabels,
) -> Option<Visibility>
where
    B: ContentBlock + ?Sized,
    T: TriggerControl + ?Sized,
{
    let (Some(block), Some(trigger)) = (block, trigger) else {
        log::debug!("[toggle] Content block or trigger control missing, nothing to toggle");
        return None;
    };

    let (next, label) = transition(block.visibility(), labels);
    block.set_visibility(next);
    trigger.set_label(label);

    log::debug!("[toggle] Example is now {:?}", next);
    Some(next)
}
