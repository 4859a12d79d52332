/// Macro to register modes in the registry with automatic launcher generation
///
/// Usage in games/mod.rs:
/// ```ignore
/// register_modes! {
///     solo => {
///         mode: SoloMode,
///         key: "1",
///         description: "Play by yourself and get a high score"
///     },
///     friend => {
///         mode: FriendMode,
///         key: "2",
///         description: "Play a two player game with a friend"
///     }
/// }
/// ```
#[macro_export]
macro_rules! register_modes {
    (
        $(
            $module:ident => {
                mode: $mode:ident,
                key: $key:expr,
                description: $desc:expr
            }
        ),* $(,)?
    ) => {
        /// Get all available modes in menu order
        pub fn get_all_modes() -> Vec<ModeEntry> {
            vec![
                $(
                    ModeEntry {
                        info: ModeInfo {
                            id: <$crate::games::$module::$mode as $crate::core::game::GameMode>::NAME,
                            key: $key,
                            description: $desc,
                        },
                        launcher: |ctx| {
                            $crate::core::engine::run_mode::<$crate::games::$module::$mode>(ctx)
                        },
                    }
                ),*
            ]
        }

        /// Get a mode by id or by menu key
        pub fn get_mode(id_or_key: &str) -> Option<ModeEntry> {
            let wanted = id_or_key.trim().to_lowercase();
            get_all_modes()
                .into_iter()
                .find(|m| m.info.id == wanted || m.info.key == wanted)
        }
    };
}
