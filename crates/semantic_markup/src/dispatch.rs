//! Tree lookup and event delivery without a host environment.

use crate::{Element, EventKind, Node};

impl<Msg> Node<Msg> {
    /// Element at `path`, where each index selects a child of the previous
    /// element. The empty path addresses this node.
    pub fn element_at(&self, path: &[usize]) -> Option<&Element<Msg>> {
        let mut current = self.as_element()?;
        for &index in path {
            current = current.child_nodes().get(index)?.as_element()?;
        }
        Some(current)
    }

    /// Path of the first element, in depth-first pre-order, matching `pred`.
    pub fn find_path(&self, pred: impl Fn(&Element<Msg>) -> bool) -> Option<Vec<usize>> {
        self.find_all_paths(pred).into_iter().next()
    }

    /// Paths of every element matching `pred`, in depth-first pre-order.
    pub fn find_all_paths(&self, pred: impl Fn(&Element<Msg>) -> bool) -> Vec<Vec<usize>> {
        let mut found = Vec::new();
        let mut path = Vec::new();
        if let Some(element) = self.as_element() {
            collect_paths(element, &pred, &mut path, &mut found);
        }
        found
    }

    /// Delivers `event` to the element at `path` and returns the messages
    /// produced by the listeners that fired.
    ///
    /// Target listeners fire first, in registration order. Bubbling events
    /// then reach ancestors, nearest first, until an element whose matching
    /// listener stops propagation has fired. Target-only listeners are
    /// skipped on ancestors. Unknown paths produce nothing.
    pub fn trigger(&self, path: &[usize], event: EventKind) -> Vec<Msg> {
        let Some(mut chain) = self.ancestry(path) else {
            return Vec::new();
        };
        chain.reverse();

        let mut messages = Vec::new();
        for (depth, element) in chain.into_iter().enumerate() {
            if depth > 0 && !event.bubbles() {
                break;
            }
            let mut stopped = false;
            for listener in element.listeners().iter().filter(|listener| {
                listener.event() == event && (depth == 0 || !listener.is_target_only())
            }) {
                messages.push(listener.fire());
                stopped |= listener.stops_propagation();
            }
            if stopped {
                break;
            }
        }
        messages
    }

    /// Delivers `event` to the first element matching `pred`.
    pub fn trigger_where(
        &self,
        pred: impl Fn(&Element<Msg>) -> bool,
        event: EventKind,
    ) -> Vec<Msg> {
        match self.find_path(pred) {
            Some(path) => self.trigger(&path, event),
            None => Vec::new(),
        }
    }

    fn ancestry(&self, path: &[usize]) -> Option<Vec<&Element<Msg>>> {
        let mut current = self.as_element()?;
        let mut chain = vec![current];
        for &index in path {
            current = current.child_nodes().get(index)?.as_element()?;
            chain.push(current);
        }
        Some(chain)
    }
}

fn collect_paths<Msg>(
    element: &Element<Msg>,
    pred: &impl Fn(&Element<Msg>) -> bool,
    path: &mut Vec<usize>,
    found: &mut Vec<Vec<usize>>,
) {
    if pred(element) {
        found.push(path.clone());
    }
    for (index, child) in element.child_nodes().iter().enumerate() {
        if let Some(child) = child.as_element() {
            path.push(index);
            collect_paths(child, pred, path, found);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Msg {
        Root,
        Toggle,
        First,
        Second,
        Hover,
        Backdrop,
    }

    fn tree() -> Node<Msg> {
        Element::new("div")
            .class("root")
            .on(EventKind::Click, || Msg::Root)
            .on_target(EventKind::Click, || Msg::Backdrop)
            .on(EventKind::MouseEnter, || Msg::Hover)
            .child(
                Element::new("span")
                    .class("plain")
                    .text("no listeners"),
            )
            .child(
                Element::new("div")
                    .class("toggle")
                    .on(EventKind::Click, || Msg::First)
                    .on_stop(EventKind::Click, || Msg::Second)
                    .child(Element::new("i").class("icon")),
            )
            .child(
                Element::new("div")
                    .class("bubbling")
                    .on(EventKind::Click, || Msg::Toggle),
            )
            .into()
    }

    #[test]
    fn element_at_follows_child_indices() {
        let tree = tree();
        assert!(tree.element_at(&[]).expect("root").has_class("root"));
        assert!(tree.element_at(&[1, 0]).expect("icon").has_class("icon"));
        assert!(tree.element_at(&[0, 0]).is_none());
        assert!(tree.element_at(&[7]).is_none());
    }

    #[test]
    fn find_paths_in_pre_order() {
        let tree = tree();
        assert_eq!(tree.find_path(|el| el.has_class("icon")), Some(vec![1, 0]));
        assert_eq!(
            tree.find_all_paths(|el| el.listens_to(EventKind::Click)),
            vec![vec![], vec![1], vec![2]]
        );
    }

    #[test]
    fn click_bubbles_to_root_without_stop() {
        let tree = tree();
        assert_eq!(tree.trigger(&[0], EventKind::Click), vec![Msg::Root]);
        assert_eq!(tree.trigger(&[2], EventKind::Click), vec![Msg::Toggle, Msg::Root]);
    }

    #[test]
    fn target_only_listeners_ignore_bubbled_events() {
        let tree = tree();
        assert_eq!(tree.trigger(&[], EventKind::Click), vec![Msg::Root, Msg::Backdrop]);
        assert!(!tree.trigger(&[0], EventKind::Click).contains(&Msg::Backdrop));
    }

    #[test]
    fn stop_propagation_fires_all_target_listeners_then_stops() {
        let tree = tree();
        assert_eq!(tree.trigger(&[1, 0], EventKind::Click), vec![Msg::First, Msg::Second]);
        assert_eq!(
            tree.trigger_where(|el| el.has_class("toggle"), EventKind::Click),
            vec![Msg::First, Msg::Second]
        );
    }

    #[test]
    fn non_bubbling_events_only_reach_the_target() {
        let tree = tree();
        assert_eq!(tree.trigger(&[], EventKind::MouseEnter), vec![Msg::Hover]);
        assert!(tree.trigger(&[0], EventKind::MouseEnter).is_empty());
        assert!(tree.trigger(&[9], EventKind::Click).is_empty());
    }
}
