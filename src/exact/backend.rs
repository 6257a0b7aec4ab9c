//! Minimal capability interface of an integer linear programming backend.
//!
//! Formulations only declare variables, linear constraints and a linear objective; the
//! backend decides how to hand them to a numerical solver. Each model is built and solved
//! exactly once, so a backend instance is consumed by [`IlpBackend::solve`].

use std::time::Duration;

use crate::errors::SolverError;

/// Index of a variable within the backend that declared it
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Sense {
    #[default]
    Maximise,
    Minimise,
}

/// Admissible values of the left hand side of a linear constraint
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstraintBound {
    AtMost(f64),
    AtLeast(f64),
    Exactly(f64),
}

impl ConstraintBound {
    /// Returns the bound as closed interval; open sides are infinite
    pub fn as_interval(&self) -> (f64, f64) {
        match *self {
            ConstraintBound::AtMost(x) => (f64::NEG_INFINITY, x),
            ConstraintBound::AtLeast(x) => (x, f64::INFINITY),
            ConstraintBound::Exactly(x) => (x, x),
        }
    }
}

/// Values of an optimal solution
#[derive(Clone, Debug, PartialEq)]
pub struct IlpSolution {
    values: Vec<f64>,
    objective: f64,
}

impl IlpSolution {
    pub fn new(values: Vec<f64>, objective: f64) -> Self {
        Self { values, objective }
    }

    /// ** Panics if `var` was not declared by the backend producing this solution **
    pub fn value(&self, var: VarId) -> f64 {
        self.values[var.0]
    }

    /// Interprets the value of a binary variable
    pub fn is_set(&self, var: VarId) -> bool {
        self.value(var) > 0.5
    }

    pub fn objective(&self) -> f64 {
        self.objective
    }

    pub fn number_of_variables(&self) -> usize {
        self.values.len()
    }
}

pub trait IlpBackend: Default {
    /// Human readable name used in logs
    fn name(&self) -> &'static str;

    /// Declares a variable with domain {0, 1}
    fn add_binary_var(&mut self) -> VarId;

    /// Declares an integer variable within `[lower, upper]`; `upper` may be infinite
    fn add_integer_var(&mut self, lower: f64, upper: f64) -> VarId;

    /// Adds the constraint `sum(coef * var) in bound`
    fn add_constraint(&mut self, terms: &[(VarId, f64)], bound: ConstraintBound);

    /// Sets the objective `sum(coef * var)`; variables not mentioned have coefficient 0
    fn set_objective(&mut self, sense: Sense, terms: &[(VarId, f64)]);

    fn number_of_variables(&self) -> usize;

    fn number_of_constraints(&self) -> usize;

    /// Solves the model to proven optimality. Infeasibility, unboundedness and reaching the
    /// time limit are reported as distinct errors.
    fn solve(self, timeout: Option<Duration>) -> Result<IlpSolution, SolverError>;
}
