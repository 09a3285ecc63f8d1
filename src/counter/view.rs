//! Declarative view description produced by the counter.
//!
//! The tree is plain data. Hosts decide how to lay it out and paint it; the
//! terminal host maps `class` names onto styles.

use super::intent::CounterIntent;

pub const CONTAINER_CLASS: &str = "counter-container";
pub const DISPLAY_CLASS: &str = "count-display";
pub const TRIGGER_CLASS: &str = "counter-btn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Text {
        class: &'static str,
        content: String,
    },
    /// Interactive element; activating it dispatches `intent`.
    Trigger {
        class: &'static str,
        label: &'static str,
        intent: CounterIntent,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    pub class: &'static str,
    pub children: Vec<ViewNode>,
}

impl ViewTree {
    pub fn counter(count: i64) -> Self {
        let mut children = vec![ViewNode::Text {
            class: DISPLAY_CLASS,
            content: format!("Count: {}", count),
        }];
        children.extend(CounterIntent::TRIGGERS.iter().map(|&intent| ViewNode::Trigger {
            class: TRIGGER_CLASS,
            label: intent.label(),
            intent,
        }));

        Self {
            class: CONTAINER_CLASS,
            children,
        }
    }

    /// First text node, if any.
    pub fn text(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            ViewNode::Text { content, .. } => Some(content.as_str()),
            ViewNode::Trigger { .. } => None,
        })
    }

    /// Triggers in document order as `(label, intent)`.
    pub fn triggers(&self) -> impl Iterator<Item = (&'static str, CounterIntent)> + '_ {
        self.children.iter().filter_map(|node| match node {
            ViewNode::Trigger { label, intent, .. } => Some((*label, *intent)),
            ViewNode::Text { .. } => None,
        })
    }
}
