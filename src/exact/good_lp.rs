use std::time::Duration;

use ::good_lp::{
    Constraint, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable,
    constraint, default_solver, variable,
};
use log::warn;

use super::backend::*;
use crate::errors::SolverError;

/// [`IlpBackend`] delegating to `good_lp` and whatever solver it was compiled with
pub struct GoodLpBackend {
    problem: ProblemVariables,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    objective: Vec<(VarId, f64)>,
    sense: Sense,
}

impl Default for GoodLpBackend {
    fn default() -> Self {
        Self {
            problem: ProblemVariables::new(),
            variables: Vec::new(),
            constraints: Vec::new(),
            objective: Vec::new(),
            sense: Sense::Maximise,
        }
    }
}

impl GoodLpBackend {
    fn expression(&self, terms: &[(VarId, f64)]) -> Expression {
        terms
            .iter()
            .map(|&(v, coef)| coef * self.variables[v.0])
            .sum()
    }
}

impl IlpBackend for GoodLpBackend {
    fn name(&self) -> &'static str {
        "good_lp"
    }

    fn add_binary_var(&mut self) -> VarId {
        self.variables.push(self.problem.add(variable().binary()));
        VarId(self.variables.len() - 1)
    }

    fn add_integer_var(&mut self, lower: f64, upper: f64) -> VarId {
        let mut def = variable().integer().min(lower);
        if upper.is_finite() {
            def = def.max(upper);
        }
        self.variables.push(self.problem.add(def));
        VarId(self.variables.len() - 1)
    }

    fn add_constraint(&mut self, terms: &[(VarId, f64)], bound: ConstraintBound) {
        let lhs = self.expression(terms);
        let con = match bound {
            ConstraintBound::AtMost(x) => constraint!(lhs <= x),
            ConstraintBound::AtLeast(x) => constraint!(lhs >= x),
            ConstraintBound::Exactly(x) => constraint!(lhs == x),
        };
        self.constraints.push(con);
    }

    fn set_objective(&mut self, sense: Sense, terms: &[(VarId, f64)]) {
        self.sense = sense;
        self.objective = terms.to_vec();
    }

    fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    fn number_of_constraints(&self) -> usize {
        self.constraints.len()
    }

    fn solve(self, timeout: Option<Duration>) -> Result<IlpSolution, SolverError> {
        if self.variables.is_empty() {
            return Ok(IlpSolution::new(Vec::new(), 0.0));
        }

        if timeout.is_some() {
            warn!("The good_lp backend ignores time limits");
        }

        let objective = self.expression(&self.objective);
        let GoodLpBackend {
            problem,
            variables,
            constraints,
            objective: objective_terms,
            sense,
        } = self;

        let unsolved = match sense {
            Sense::Maximise => problem.maximise(objective),
            Sense::Minimise => problem.minimise(objective),
        };

        let mut model = unsolved.using(default_solver);
        for con in constraints {
            model = model.with(con);
        }

        let solution = model.solve().map_err(|e| match e {
            ResolutionError::Infeasible => SolverError::Infeasible,
            ResolutionError::Unbounded => SolverError::Unbounded,
            e => SolverError::Backend(e.to_string()),
        })?;

        let values: Vec<f64> = variables.iter().map(|&v| solution.value(v)).collect();
        let objective = objective_terms
            .iter()
            .map(|&(v, coef)| coef * values[v.0])
            .sum();

        Ok(IlpSolution::new(values, objective))
    }
}
