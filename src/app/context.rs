use crate::ports::{ApplicationEnvironment, CodeGeneratorActions, LibraryManager};

/// Application context holding the collaborators generators are built from.
pub struct AppContext<E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    environment: E,
    libraries: L,
    actions: A,
}

impl<E, L, A> AppContext<E, L, A>
where
    E: ApplicationEnvironment,
    L: LibraryManager,
    A: CodeGeneratorActions,
{
    /// Create a new application context.
    pub fn new(environment: E, libraries: L, actions: A) -> Self {
        Self { environment, libraries, actions }
    }

    /// Get a reference to the application environment.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Get a reference to the library manager.
    pub fn libraries(&self) -> &L {
        &self.libraries
    }

    /// Get a reference to the code-generation actions.
    pub fn actions(&self) -> &A {
        &self.actions
    }
}
