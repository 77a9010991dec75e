use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::rc::Rc;

use super::value::Value;
use crate::tree_walk::interpreter::{Result, RuntimeError};

/// One pixel. Components are stored as plain numbers so `get` can hand back
/// a record without conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cell {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A pixel grid shared with every binding that refers to it. The canvas is
/// host state, not program data, so cloning a `Canvas` value keeps pointing
/// at the same grid even across scope duplication.
#[derive(Debug, Clone)]
pub struct Canvas {
    rows: usize,
    columns: usize,
    grid: Rc<RefCell<Vec<Cell>>>,
}

impl Canvas {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            grid: Rc::new(RefCell::new(vec![Cell::default(); rows * columns])),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Maps an `(x, y)` argument pair onto a grid offset. Coordinates must
    /// be whole non-negative numbers inside the grid.
    fn index_of(&self, x: &Value, y: &Value) -> Result<usize> {
        let err = || RuntimeError::InvalidCoordinates {
            x: x.to_string(),
            y: y.to_string(),
        };
        let (Value::Number(x_num), Value::Number(y_num)) = (x, y) else {
            return Err(err());
        };
        if x_num.fract() != 0.0 || y_num.fract() != 0.0 || *x_num < 0.0 || *y_num < 0.0 {
            return Err(err());
        }
        let (column, row) = (*x_num as usize, *y_num as usize);
        if row >= self.rows || column >= self.columns {
            return Err(err());
        }
        Ok(row * self.columns + column)
    }

    pub fn get(&self, x: &Value, y: &Value) -> Result<Value> {
        let cell = self.grid.borrow()[self.index_of(x, y)?];
        Ok(Value::Record(BTreeMap::from([
            ("r".to_string(), Value::Number(cell.r)),
            ("g".to_string(), Value::Number(cell.g)),
            ("b".to_string(), Value::Number(cell.b)),
        ])))
    }

    pub fn fill(&self, x: &Value, y: &Value, color: &Value) -> Result<()> {
        let index = self.index_of(x, y)?;
        let Value::Record(fields) = color else {
            return Err(RuntimeError::InvalidArgument {
                builtin: "Canvas.fill".to_string(),
                details: format!("expected a color record, got {}", color.type_name()),
            });
        };
        let component = |key: &str| -> Result<f64> {
            match fields.get(key) {
                Some(Value::Number(n)) => Ok(*n),
                // missing channels paint as 0
                None => Ok(0.0),
                Some(other) => Err(RuntimeError::InvalidArgument {
                    builtin: "Canvas.fill".to_string(),
                    details: format!("color component {key} must be a number, got {}", other.type_name()),
                }),
            }
        };
        let cell = Cell {
            r: component("r")?,
            g: component("g")?,
            b: component("b")?,
        };
        self.grid.borrow_mut()[index] = cell;
        Ok(())
    }

    pub fn erase(&self, x: &Value, y: &Value) -> Result<()> {
        let index = self.index_of(x, y)?;
        self.grid.borrow_mut()[index] = Cell::default();
        Ok(())
    }
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.grid, &other.grid)
    }
}

impl Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<canvas {}x{}>", self.rows, self.columns)
    }
}
