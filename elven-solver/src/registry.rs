//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::marker::PhantomData;

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Factory for creating type-erased solver instances
///
/// A trait object rather than a boxed closure: the created instance borrows
/// the input string, so the return type depends on the call-site lifetime.
pub trait SolverFactory: Send + Sync {
    /// Parse the input and build a solver instance borrowing from it
    fn create<'a>(&self, input: &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

    /// Number of parts the created solvers support
    fn parts(&self) -> u8;
}

/// `SolverFactory` for a concrete `Solver` type
struct TypedFactory<S> {
    year: u16,
    day: u8,
    _solver: PhantomData<fn() -> S>,
}

impl<S: Solver + Sync + 'static> SolverFactory for TypedFactory<S> {
    fn create<'a>(&self, input: &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
        Ok(Box::new(SolverInstance::<S>::new(self.year, self.day, input)?))
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// Detects duplicate registrations and rejects out-of-range year/day
/// combinations; the registry is immutable after `build()`.
///
/// # Example
///
/// ```no_run
/// # use elven_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<Box<dyn SolverFactory>>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver type for a specific year and day
    ///
    /// Returns an error if the year/day is out of bounds or a solver is
    /// already registered for that combination.
    pub fn register<S>(mut self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + Sync + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(Box::new(TypedFactory::<S> {
            year,
            day,
            _solver: PhantomData,
        }));
        Ok(self)
    }

    /// Register a pre-built factory for a specific year and day
    pub fn register_factory(
        mut self,
        year: u16,
        day: u8,
        factory: Box<dyn SolverFactory>,
    ) -> Result<Self, RegistrationError> {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(factory);
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<SolverPlugin>() {
            self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
        }
        Ok(self)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter returns `true`, allowing
    /// selective registration based on tags, year, day, or any other
    /// criteria.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use elven_solver::RegistryBuilder;
    /// // Register only 2023 solvers
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2023)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Uses a flat Vec with index math for O(1) storage and lookup, covering
/// years 2015-2034 and days 1-25.
pub struct SolverRegistry {
    entries: Vec<Option<Box<dyn SolverFactory>>>,
}

impl SolverRegistry {
    /// Iterate over metadata for all registered factories
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts(),
                }
            })
        })
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts(),
            })
    }

    /// Check if a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Create a solver instance for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully parsed and created solver
    /// * `Err(SolverError)` - Solver not found, invalid year/day, or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let factory = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        factory.create(input).map_err(SolverError::ParseError)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// A type-erased interface with no associated types, so solvers of
/// different concrete types can be collected in a single container for the
/// plugin system. Any type implementing `Solver` gets this through a
/// blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted by the `AutoRegisterSolver` derive macro and collected via
/// `inventory` at link time.
///
/// # Example
///
/// ```no_run
/// use elven_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["2023", "easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "2023", "grid", "bfs")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
