use crate::routine::{ExerciseState, Step};

pub mod constants {
    pub const STARTING: &str = "Iniciando ejercicio...";
    pub const REST: &str =
        "Separa las piernas a la altura de los hombros y baja los brazos hasta pegarlos al tronco";
    pub const ARMS_OUT: &str = "Bien, has completado la posicion inicial\nAhora extiende los brazos hacia los lados, en cruz y flexiona las rodillas";
    pub const ARMS_OVERHEAD: &str = "Bien, falta poco! Flexiona mas las rodillas y da una palmada levantando las manos por encima de la cabeza";
    pub const COMPLETED: &str =
        "Muy bien, has completado el ejercicio!!! Vuelve a la posicion inicial";
}

/// Instruction shown while waiting for the pose of `state`.
pub fn instruction(state: ExerciseState) -> &'static str {
    match state {
        ExerciseState::Rest => constants::REST,
        ExerciseState::ArmsOut => constants::ARMS_OUT,
        ExerciseState::ArmsOverhead => constants::ARMS_OVERHEAD,
    }
}

/// Instruction for the frame that produced `step`; a finished cycle gets the
/// congratulation for that one frame.
pub fn for_step(step: &Step) -> &'static str {
    if step.completed {
        constants::COMPLETED
    } else {
        instruction(step.state)
    }
}

/// Movement / repetition counter label.
pub fn progress(step: &Step) -> String {
    format!("Mov / Rep:\n{} / {}", step.state.index(), step.repetitions)
}
