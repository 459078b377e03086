pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod select;
pub mod tabs;
pub mod textarea;

pub use badge::{Badge, BadgeVariant};
pub use button::{button_class, Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardFooter, CardHeader};
pub use input::Input;
pub use select::Select;
pub use tabs::Tabs;
pub use textarea::Textarea;
