use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::spline::family::SplineType;
use crate::spline::spline::Spline;
use crate::spline::splineerror::SplineError;

/// An ordered collection of named splines sharing one abscissa array,
/// each member free to use a different family. Insertion order is kept for
/// indexed access; a name map backs the lookups.
pub struct SplineSet {
    members: Vec<Spline>,
    name_to_index: HashMap<String, usize>,
}

impl fmt::Debug for SplineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.members.iter()).finish()
    }
}

impl SplineSet {
    pub fn new() -> SplineSet {
        SplineSet {
            members: Vec::new(),
            name_to_index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Builds all members in one shot: a shared `xs` array and one `ys`
    /// column per member. Everything is validated before the first member
    /// is constructed, so a failed build leaves the set unchanged.
    pub fn build(
        &mut self,
        names: &[&str],
        types: &[SplineType],
        xs: &[f64],
        yss: &[Vec<f64>],
    ) -> Result<(), SplineError> {
        if names.len() != types.len() || names.len() != yss.len() {
            return Err(SplineError::LengthMismatch {
                x_len: names.len(),
                y_len: types.len().max(yss.len()),
            });
        }
        for ys in yss {
            if ys.len() != xs.len() {
                return Err(SplineError::LengthMismatch {
                    x_len: xs.len(),
                    y_len: ys.len(),
                });
            }
        }
        let mut name_to_index = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name_to_index.insert((*name).to_owned(), index).is_some() {
                return Err(SplineError::DuplicateName {
                    name: (*name).to_owned(),
                });
            }
        }

        let mut members = Vec::with_capacity(names.len());
        for i in 0..names.len() {
            let mut spline = Spline::new(names[i].to_owned(), types[i]);
            spline.build(xs, &yss[i])?;
            members.push(spline);
        }
        self.members = members;
        self.name_to_index = name_to_index;
        Ok(())
    }

    pub fn member(&self, index: usize) -> Result<&Spline, SplineError> {
        self.members
            .get(index)
            .ok_or(SplineError::IndexOutOfRange {
                index,
                count: self.members.len(),
            })
    }

    pub fn member_mut(&mut self, index: usize) -> Result<&mut Spline, SplineError> {
        let count = self.members.len();
        self.members
            .get_mut(index)
            .ok_or(SplineError::IndexOutOfRange { index, count })
    }

    pub fn evaluate(&self, x: f64, index: usize) -> Result<f64, SplineError> {
        self.member(index)?.evaluate(x)
    }

    pub fn index_of(&self, name: &str) -> Result<usize, SplineError> {
        self.name_to_index
            .get(name)
            .copied()
            .ok_or_else(|| SplineError::NameNotFound {
                name: name.to_owned(),
            })
    }

    pub fn get(&self, name: &str) -> Result<&Spline, SplineError> {
        let index = self.index_of(name)?;
        self.member(index)
    }

    pub fn header(&self, index: usize) -> Result<&String, SplineError> {
        Ok(self.member(index)?.name())
    }

    /// Per-member diagnostic summary: name, family, point count, domain.
    pub fn info(&self, sink: &mut dyn Write) -> Result<(), SplineError> {
        writeln!(sink, "SplineSet: {} splines", self.members.len())?;
        for spline in &self.members {
            writeln!(
                sink,
                "  {} [{}]: {} points on [{}, {}]",
                spline.name(),
                spline.spline_type(),
                spline.n(),
                spline.x_min()?,
                spline.x_max()?,
            )?;
        }
        Ok(())
    }

    /// Tab-separated table over the common domain: header `x` plus one
    /// member name per column, then `nintervals + 1` sample rows.
    pub fn dump_table(&self, sink: &mut dyn Write, nintervals: usize) -> Result<(), SplineError> {
        let first = self.member(0)?;
        let x_min = first.x_min()?;
        let x_max = first.x_max()?;

        write!(sink, "x")?;
        for spline in &self.members {
            write!(sink, "\t{}", spline.name())?;
        }
        writeln!(sink)?;

        let dx = (x_max - x_min) / nintervals as f64;
        for i in 0..=nintervals {
            let x = if i == nintervals {
                x_max
            } else {
                f64::mul_add(i as f64, dx, x_min)
            };
            write!(sink, "{}", x)?;
            for spline in &self.members {
                write!(sink, "\t{}", spline.evaluate(x)?)?;
            }
            writeln!(sink)?;
        }
        Ok(())
    }
}
