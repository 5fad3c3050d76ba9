/// Floating unit info panel anchored in screen space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub unit_id: String,
    pub x: f32,
    pub y: f32,
}
