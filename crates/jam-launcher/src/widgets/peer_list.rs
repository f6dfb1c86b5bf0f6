/// Editable list of peer display names with add, remove, and edit-in-place.
///
/// List order is kept as shown; the link builder emits per-peer ids in
/// this order.
pub struct PeerListWidget<'a> {
    label: &'a str,
    peers: &'a mut Vec<String>,
}

impl<'a> PeerListWidget<'a> {
    pub fn new(label: &'a str, peers: &'a mut Vec<String>) -> Self {
        Self { label, peers }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.label(self.label);
        ui.indent(self.label, |ui| {
            let mut remove_idx = None;

            for (i, peer) in self.peers.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(peer);
                    if ui.small_button("\u{2717}").clicked() {
                        remove_idx = Some(i);
                    }
                });
            }

            if let Some(idx) = remove_idx {
                self.peers.remove(idx);
            }

            if ui.button("Add Peer").clicked() {
                self.peers.push(String::new());
            }
        });
    }
}
