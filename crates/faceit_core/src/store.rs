//! Face store - the expression plus the view style, with change notification
//!
//! A [`FaceStore`] is owned by whatever controls the face (a view controller,
//! a test, the CLI). Every mutation recomputes the [`DrawParameters`] and, if
//! they changed, hands the new value to each subscriber. A renderer subscribes
//! once and redraws from the parameters it receives.
//!
//! # Example
//!
//! ```rust
//! use faceit_core::expression::Move;
//! use faceit_core::store::FaceStore;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut store = FaceStore::default();
//!
//! let redraws = Rc::new(Cell::new(0));
//! let counter = redraws.clone();
//! let _handle = store.subscribe(move |_params| counter.set(counter.get() + 1));
//!
//! store.apply(Move::Happier);
//! assert_eq!(redraws.get(), 1);
//! ```

use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace, warn};

use crate::config::FaceConfig;
use crate::expression::{FacialExpression, Move};
use crate::params::DrawParameters;

new_key_type! {
    /// Unique identifier for a store subscriber
    struct SubscriberId;
}

type Callback = Box<dyn FnMut(&DrawParameters)>;

/// Handle for unsubscribing from store updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionHandle {
    id: SubscriberId,
}

/// Owns the current expression and the parameters derived from it
pub struct FaceStore {
    expression: FacialExpression,
    params: DrawParameters,
    subscribers: SlotMap<SubscriberId, Callback>,
}

impl FaceStore {
    /// Create a store with the default view style
    pub fn new(expression: FacialExpression) -> Self {
        Self::with_style(expression, DrawParameters::default())
    }

    /// Create a store with a view style (scale, line width, color).
    ///
    /// The expression-driven fields of `style` are replaced. A style with a
    /// scale or line width that is not finite and positive falls back to the
    /// default style.
    pub fn with_style(expression: FacialExpression, style: DrawParameters) -> Self {
        let style = match style.validate_style() {
            Ok(()) => style,
            Err(err) => {
                warn!(%err, "invalid view style, using the default");
                DrawParameters::default()
            }
        };
        Self {
            expression,
            params: style.with_expression(&expression),
            subscribers: SlotMap::with_key(),
        }
    }

    pub fn from_config(config: &FaceConfig) -> Self {
        Self::with_style(config.expression, config.style.to_params())
    }

    pub fn expression(&self) -> FacialExpression {
        self.expression
    }

    pub fn params(&self) -> DrawParameters {
        self.params
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Replace the whole expression
    pub fn set_expression(&mut self, expression: FacialExpression) {
        self.expression = expression;
        self.commit(self.params.with_expression(&expression));
    }

    /// Update the expression using a function
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(FacialExpression) -> FacialExpression,
    {
        self.set_expression(f(self.expression));
    }

    /// Apply a move to the current expression
    pub fn apply(&mut self, mv: Move) {
        debug!(%mv, from = %self.expression, "applying move");
        self.update(|expression| expression.apply(mv));
    }

    /// Multiply the scale by an incremental pinch factor
    pub fn zoom(&mut self, factor: f32) {
        self.commit(self.params.zoomed(factor));
    }

    /// Replace the view style, keeping the expression-driven fields.
    ///
    /// An invalid style is ignored and the current parameters are kept.
    pub fn set_style(&mut self, style: DrawParameters) {
        if let Err(err) = style.validate_style() {
            warn!(%err, "ignoring view style");
            return;
        }
        self.commit(style.with_expression(&self.expression));
    }

    fn commit(&mut self, params: DrawParameters) {
        if params == self.params {
            trace!(expression = %self.expression, "parameters unchanged");
            return;
        }
        self.params = params;
        debug!(
            expression = %self.expression,
            subscribers = self.subscribers.len(),
            "parameters changed"
        );
        for callback in self.subscribers.values_mut() {
            callback(&params);
        }
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Subscribe to parameter changes
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionHandle
    where
        F: FnMut(&DrawParameters) + 'static,
    {
        let id = self.subscribers.insert(Box::new(callback));
        SubscriptionHandle { id }
    }

    /// Remove a subscriber. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        self.subscribers.remove(handle.id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for FaceStore {
    fn default() -> Self {
        Self::new(FacialExpression::default())
    }
}

impl std::fmt::Debug for FaceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceStore")
            .field("expression", &self.expression)
            .field("params", &self.params)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::expression::{EyeBrows, Eyes, Mouth};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(store: &mut FaceStore) -> (Rc<RefCell<Vec<DrawParameters>>>, SubscriptionHandle) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let handle = store.subscribe(move |params: &DrawParameters| sink.borrow_mut().push(*params));
        (seen, handle)
    }

    #[test]
    fn test_initial_params_follow_expression() {
        let store = FaceStore::default();
        let params = store.params();
        assert!(!params.eyes_open);
        assert_eq!(params.eye_brow_tilt, 0.5);
        assert_eq!(params.mouth_curvature, -0.5);
        assert_eq!(params.scale, 0.90);
    }

    #[test]
    fn test_subscriber_sees_each_change() {
        let mut store = FaceStore::new(FacialExpression::new(
            Eyes::Open,
            EyeBrows::Normal,
            Mouth::Neutral,
        ));
        let (seen, _handle) = recorder(&mut store);

        store.apply(Move::Happier);
        store.apply(Move::Furrow);
        store.apply(Move::ToggleEyes);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].mouth_curvature, 0.5);
        assert_eq!(seen[1].eye_brow_tilt, -0.5);
        assert!(!seen[2].eyes_open);
        assert_eq!(store.expression().mouth, Mouth::Grin);
    }

    #[test]
    fn test_saturated_move_does_not_notify() {
        let mut store = FaceStore::new(FacialExpression::new(
            Eyes::Squinting,
            EyeBrows::Furrowed,
            Mouth::Smile,
        ));
        let (seen, _handle) = recorder(&mut store);

        store.apply(Move::Happier);
        store.apply(Move::Furrow);
        store.apply(Move::ToggleEyes);

        assert!(seen.borrow().is_empty());
        assert_eq!(store.expression().eyes, Eyes::Squinting);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = FaceStore::default();
        let (seen, handle) = recorder(&mut store);
        assert_eq!(store.subscriber_count(), 1);

        store.apply(Move::Happier);
        assert!(store.unsubscribe(handle));
        assert!(!store.unsubscribe(handle));
        store.apply(Move::Happier);

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_zoom_and_style_survive_expression_changes() {
        let mut store = FaceStore::with_style(
            FacialExpression::default(),
            DrawParameters::default().with_color(Color::RED),
        );
        let (seen, _handle) = recorder(&mut store);

        store.zoom(0.5);
        assert!((store.params().scale - 0.45).abs() < 1e-6);

        store.apply(Move::Sadder);
        assert!((store.params().scale - 0.45).abs() < 1e-6);
        assert_eq!(store.params().color, Color::RED);
        assert_eq!(store.params().mouth_curvature, -1.0);

        store.zoom(-2.0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_set_style_keeps_expression_fields() {
        let mut store = FaceStore::new(FacialExpression::new(
            Eyes::Open,
            EyeBrows::Relaxed,
            Mouth::Smile,
        ));
        store.set_style(DrawParameters {
            mouth_curvature: -1.0,
            line_width: 1.0,
            ..Default::default()
        });
        assert_eq!(store.params().mouth_curvature, 1.0);
        assert_eq!(store.params().line_width, 1.0);
    }

    #[test]
    fn test_set_style_rejects_invalid_values() {
        let mut store = FaceStore::default();
        let (seen, _handle) = recorder(&mut store);
        let before = store.params();

        store.set_style(DrawParameters::default().with_scale(-1.0));
        store.set_style(DrawParameters::default().with_line_width(f32::NAN));
        store.set_style(DrawParameters::default().with_scale(f32::INFINITY));

        assert_eq!(store.params(), before);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_with_style_falls_back_on_invalid_values() {
        let store = FaceStore::with_style(
            FacialExpression::default(),
            DrawParameters::default().with_scale(0.0).with_color(Color::RED),
        );
        let params = store.params();
        assert_eq!(params.scale, 0.90);
        assert_eq!(params.color, Color::BLUE);
        assert_eq!(params.mouth_curvature, -0.5);
    }

    #[test]
    fn test_repeated_zoom_keeps_scale_finite() {
        let mut store = FaceStore::default();
        for _ in 0..10 {
            store.zoom(1e10);
        }
        assert!(store.params().scale.is_finite());
        assert!(store.params().scale > 0.0);
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut store = FaceStore::default();
        store.update(|e| FacialExpression {
            eyes: Eyes::Open,
            ..e
        });
        assert!(store.params().eyes_open);
        assert_eq!(store.expression().mouth, Mouth::Smirk);
    }
}
