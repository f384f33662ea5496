pub mod coffee_with_hook;

pub use coffee_with_hook::CoffeeWithHook;
