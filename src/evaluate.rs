use crate::{BuildNumber, FilterNode, RangeBound, Tri};

/// Evaluate a filter against the running build.
///
/// A missing filter is unconditionally true. `and`/`or` over an empty list
/// are false. Anything that cannot be decided (malformed range bound,
/// unrecognized node) is [`Tri::Unknown`], which propagates through the
/// enclosing nodes: `not(not(p))` is `p` only when `p` is not unknown.
#[must_use]
pub fn evaluate(node: Option<&FilterNode>, build: &BuildNumber) -> Tri {
    match node {
        None => Tri::True,
        Some(node) => eval_node(node, build),
    }
}

fn eval_node(node: &FilterNode, build: &BuildNumber) -> Tri {
    match node {
        FilterNode::Literal(v) => Tri::from(*v),
        FilterNode::And(items) => eval_and(items, build),
        FilterNode::Or(items) => eval_or(items, build),
        FilterNode::Not(inner) => !eval_node(inner, build),
        FilterNode::BuildRange { since, until } => eval_range(since.as_ref(), until.as_ref(), build),
        FilterNode::Unrecognized(_) => Tri::Unknown,
    }
}

fn eval_and(items: &[FilterNode], build: &BuildNumber) -> Tri {
    if items.is_empty() {
        return Tri::False;
    }
    let mut saw_unknown = false;
    for item in items {
        match eval_node(item, build) {
            Tri::False => return Tri::False,
            Tri::Unknown => saw_unknown = true,
            Tri::True => {}
        }
    }
    if saw_unknown {
        Tri::Unknown
    } else {
        Tri::True
    }
}

fn eval_or(items: &[FilterNode], build: &BuildNumber) -> Tri {
    if items.is_empty() {
        return Tri::False;
    }
    let mut saw_unknown = false;
    for item in items {
        match eval_node(item, build) {
            Tri::True => return Tri::True,
            Tri::Unknown => saw_unknown = true,
            Tri::False => {}
        }
    }
    if saw_unknown {
        Tri::Unknown
    } else {
        Tri::False
    }
}

fn eval_range(since: Option<&RangeBound>, until: Option<&RangeBound>, build: &BuildNumber) -> Tri {
    let since = match since {
        None => None,
        Some(RangeBound::Parsed(b)) => Some(b),
        Some(RangeBound::Malformed(_)) => return Tri::Unknown,
    };
    let until = match until {
        None => None,
        Some(RangeBound::Parsed(b)) => Some(b),
        Some(RangeBound::Malformed(_)) => return Tri::Unknown,
    };

    let too_old = since.is_some_and(|since| since > build);
    let too_new = until.is_some_and(|until| build > until);
    Tri::from(!too_old && !too_new)
}
