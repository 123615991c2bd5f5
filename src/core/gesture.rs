//! Eine zusammenhängende Zeichen-Geste (Kontakt bis Loslassen).

use glam::DVec2;

/// Geordnete Punktfolge einer Geste in logischen Koordinaten.
///
/// Wird beim Gesten-Start mit dem ersten Punkt angelegt, bei jeder
/// Bewegung erweitert und beim Gesten-Ende an den Fitter übergeben.
/// Eine Geste ist nie leer.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    points: Vec<DVec2>,
    highest_index: usize,
}

impl Gesture {
    /// Beginnt eine neue Geste am Startpunkt.
    pub fn begin(start: DVec2) -> Self {
        Self {
            points: vec![start],
            highest_index: 0,
        }
    }

    /// Hängt einen Bewegungs-Sample an.
    pub fn push(&mut self, p: DVec2) {
        // strikt größer: bei Gleichstand gewinnt das erste Vorkommen
        if p.y > self.points[self.highest_index].y {
            self.highest_index = self.points.len();
        }
        self.points.push(p);
    }

    /// Erster Punkt.
    pub fn start(&self) -> DVec2 {
        self.points[0]
    }

    /// Letzter Punkt.
    pub fn end(&self) -> DVec2 {
        self.points[self.points.len() - 1]
    }

    /// Punkt mit maximalem Y.
    pub fn highest(&self) -> DVec2 {
        self.points[self.highest_index]
    }

    /// Index des höchsten Punkts.
    pub fn highest_index(&self) -> usize {
        self.highest_index
    }

    /// Alle Punkte in Eingangsreihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Anzahl der Punkte (mindestens 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_end_and_highest() {
        let mut gesture = Gesture::begin(DVec2::new(-5.0, 0.0));
        gesture.push(DVec2::new(0.0, 4.0));
        gesture.push(DVec2::new(5.0, 1.0));

        assert_eq!(gesture.start(), DVec2::new(-5.0, 0.0));
        assert_eq!(gesture.end(), DVec2::new(5.0, 1.0));
        assert_eq!(gesture.highest(), DVec2::new(0.0, 4.0));
        assert_eq!(gesture.len(), 3);
    }

    #[test]
    fn test_highest_tie_keeps_first_occurrence() {
        let mut gesture = Gesture::begin(DVec2::new(0.0, 0.0));
        gesture.push(DVec2::new(1.0, 3.0));
        gesture.push(DVec2::new(2.0, 3.0));
        assert_eq!(gesture.highest_index(), 1);
    }

    #[test]
    fn test_single_point_gesture() {
        let gesture = Gesture::begin(DVec2::new(2.0, 2.0));
        assert_eq!(gesture.start(), gesture.end());
        assert_eq!(gesture.highest(), gesture.start());
    }
}
