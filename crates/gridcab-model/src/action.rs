use std::fmt;

use serde::Serialize;

use crate::grid::Position;

/// What a single taxi does in one time step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AtomKind {
    Wait,
    Move(Position),
    PickUp(String),
    DropOff(String),
    Refuel,
}

/// An atomic action: one [`AtomKind`] bound to the taxi performing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Atom {
    pub taxi: String,
    pub kind: AtomKind,
}

impl Atom {
    pub fn wait(taxi: impl Into<String>) -> Self {
        Self { taxi: taxi.into(), kind: AtomKind::Wait }
    }

    pub fn mv(taxi: impl Into<String>, to: Position) -> Self {
        Self { taxi: taxi.into(), kind: AtomKind::Move(to) }
    }

    pub fn pick_up(taxi: impl Into<String>, passenger: impl Into<String>) -> Self {
        Self { taxi: taxi.into(), kind: AtomKind::PickUp(passenger.into()) }
    }

    pub fn drop_off(taxi: impl Into<String>, passenger: impl Into<String>) -> Self {
        Self { taxi: taxi.into(), kind: AtomKind::DropOff(passenger.into()) }
    }

    pub fn refuel(taxi: impl Into<String>) -> Self {
        Self { taxi: taxi.into(), kind: AtomKind::Refuel }
    }

    /// Wire tag of this action kind.
    pub fn tag(&self) -> &'static str {
        match self.kind {
            AtomKind::Wait => "wait",
            AtomKind::Move(_) => "move",
            AtomKind::PickUp(_) => "pick up",
            AtomKind::DropOff(_) => "drop off",
            AtomKind::Refuel => "refuel",
        }
    }
}

impl fmt::Display for Atom {
    /// Renders the tuple vocabulary used by the scenario harnesses:
    /// `("wait", "t")`, `("move", "t", (r, c))`, `("pick up", "t", "p")`,
    /// `("drop off", "t", "p")`, `("refuel", "t")`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AtomKind::Wait | AtomKind::Refuel => {
                write!(f, "({:?}, {:?})", self.tag(), self.taxi)
            }
            AtomKind::Move(to) => {
                write!(f, "({:?}, {:?}, {})", self.tag(), self.taxi, to)
            }
            AtomKind::PickUp(p) | AtomKind::DropOff(p) => {
                write!(f, "({:?}, {:?}, {:?})", self.tag(), self.taxi, p)
            }
        }
    }
}

/// One discrete time step: a lone atomic action in the single-taxi case, or
/// a simultaneous assignment of one atom per taxi (in taxi-name order).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Atomic(Atom),
    Joint(Vec<Atom>),
}

impl Action {
    /// The per-taxi atoms of this step, in order.
    pub fn atoms(&self) -> &[Atom] {
        match self {
            Action::Atomic(atom) => std::slice::from_ref(atom),
            Action::Joint(atoms) => atoms,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Atomic(atom) => atom.fmt(f),
            Action::Joint(atoms) => {
                write!(f, "(")?;
                for (i, atom) in atoms.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    atom.fmt(f)?;
                }
                write!(f, ")")
            }
        }
    }
}
