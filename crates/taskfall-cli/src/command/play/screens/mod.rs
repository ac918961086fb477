pub use self::game::GameScreen;

mod game;
