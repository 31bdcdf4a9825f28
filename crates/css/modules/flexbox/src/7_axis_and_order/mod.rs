//! Ordering and orientation
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flow-order>
//!
//! Items keep their source order; `*-reverse` directions and `wrap-reverse` only change the order
//! in which items (or lines) are visited when space is handed out and positions accumulate.

/// Visit `boxes` in flow order, passing each box's position in that order.
///
/// With `reverse` the last box in source order is visited first, so it receives the leading space
/// and the `main-start` edge.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub fn for_each_in_flow_order<T>(
    boxes: &mut [T],
    reverse: bool,
    mut visit: impl FnMut(usize, &mut T),
) {
    if reverse {
        boxes
            .iter_mut()
            .rev()
            .enumerate()
            .for_each(|(position, item)| visit(position, item));
    } else {
        boxes
            .iter_mut()
            .enumerate()
            .for_each(|(position, item)| visit(position, item));
    }
}
