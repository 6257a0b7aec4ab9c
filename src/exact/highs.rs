use std::time::Duration;

use ::highs::{Col, HighsModelStatus, Model, RowProblem};
use itertools::Itertools;
use log::{debug, trace};

use super::backend::*;
use crate::errors::SolverError;

#[derive(Clone, Debug)]
struct ColumnSpec {
    integer: bool,
    lower: f64,
    upper: f64,
    objective: f64,
}

#[derive(Clone, Debug)]
struct RowSpec {
    lower: f64,
    upper: f64,
    terms: Vec<(VarId, f64)>,
}

/// [`IlpBackend`] solving with HiGHS. The model is recorded and only handed to HiGHS when
/// solving, as HiGHS expects objective coefficients upon column creation.
#[derive(Clone, Debug, Default)]
pub struct HighsBackend {
    columns: Vec<ColumnSpec>,
    rows: Vec<RowSpec>,
    sense: Sense,
}

impl HighsBackend {
    fn add_column(&mut self, integer: bool, lower: f64, upper: f64) -> VarId {
        self.columns.push(ColumnSpec {
            integer,
            lower,
            upper,
            objective: 0.0,
        });
        VarId(self.columns.len() - 1)
    }

    fn build_problem(&self) -> RowProblem {
        let mut pb = RowProblem::default();

        let cols: Vec<Col> = self
            .columns
            .iter()
            .map(|c| {
                if c.integer {
                    pb.add_integer_column(c.objective, c.lower..=c.upper)
                } else {
                    pb.add_column(c.objective, c.lower..=c.upper)
                }
            })
            .collect_vec();

        for row in &self.rows {
            pb.add_row(
                row.lower..=row.upper,
                row.terms.iter().map(|&(v, coef)| (cols[v.0], coef)),
            );
        }

        pb
    }
}

impl IlpBackend for HighsBackend {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn add_binary_var(&mut self) -> VarId {
        self.add_column(true, 0.0, 1.0)
    }

    fn add_integer_var(&mut self, lower: f64, upper: f64) -> VarId {
        self.add_column(true, lower, upper)
    }

    fn add_constraint(&mut self, terms: &[(VarId, f64)], bound: ConstraintBound) {
        let (lower, upper) = bound.as_interval();
        self.rows.push(RowSpec {
            lower,
            upper,
            terms: terms.to_vec(),
        });
    }

    fn set_objective(&mut self, sense: Sense, terms: &[(VarId, f64)]) {
        self.sense = sense;
        for c in self.columns.iter_mut() {
            c.objective = 0.0;
        }
        for &(v, coef) in terms {
            self.columns[v.0].objective += coef;
        }
    }

    fn number_of_variables(&self) -> usize {
        self.columns.len()
    }

    fn number_of_constraints(&self) -> usize {
        self.rows.len()
    }

    fn solve(self, timeout: Option<Duration>) -> Result<IlpSolution, SolverError> {
        if self.columns.is_empty() {
            return Ok(IlpSolution::new(Vec::new(), 0.0));
        }

        trace!(
            "Hand model with {} columns and {} rows to HiGHS",
            self.columns.len(),
            self.rows.len()
        );

        // Prepare the model based on the previously recorded problem
        let mut model = Model::new(self.build_problem());
        model.make_quiet();
        if let Some(tme) = timeout {
            model.set_option("time_limit", tme.as_secs_f64());
        }

        #[cfg(not(feature = "par"))]
        {
            model.set_option("parallel", "off");
            model.set_option("threads", 1);
        }
        model.set_sense(match self.sense {
            Sense::Maximise => ::highs::Sense::Maximise,
            Sense::Minimise => ::highs::Sense::Minimise,
        });

        // Solve and check whether a solution could be obtained
        let solved = model
            .try_solve()
            .map_err(|e| SolverError::Backend(format!("HiGHS run failed: {e:?}")))?;

        match solved.status() {
            HighsModelStatus::Optimal => {}
            HighsModelStatus::Infeasible | HighsModelStatus::UnboundedOrInfeasible => {
                return Err(SolverError::Infeasible);
            }
            HighsModelStatus::Unbounded => return Err(SolverError::Unbounded),
            HighsModelStatus::ReachedTimeLimit => return Err(SolverError::Timeout),
            status => {
                debug!("HiGHS terminated with status {status:?}");
                return Err(SolverError::Backend(format!(
                    "unexpected HiGHS status {status:?}"
                )));
            }
        };

        // Extract solution
        let values = solved.get_solution().columns().to_vec();
        let objective = self
            .columns
            .iter()
            .zip(&values)
            .map(|(c, x)| c.objective * x)
            .sum();

        Ok(IlpSolution::new(values, objective))
    }
}
