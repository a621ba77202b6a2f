use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// `ar` selects Arabic; any other segment falls back to English.
    pub fn from_segment(segment: &str) -> Self {
        if segment.trim().eq_ignore_ascii_case("ar") {
            Self::Ar
        } else {
            Self::En
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Self::Ar
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    SubscriptionDaysTitle,
    SearchPlaceholder,
    NoDate,
    DaySelected,
    DayNotSelected,
    StatusNotSelected,
    StatusSelectedSome,
    StatusSelectedAll,
    Edit,
    NoSearchResults,
    NoPlanDays,
    FetchFailed,
    EditClicked,
    LoginTitle,
    TokenLabel,
    SignIn,
    SignedIn,
    InvalidToken,
}

pub fn message(locale: Locale, id: MessageId) -> &'static str {
    match locale {
        Locale::En => english(id),
        Locale::Ar => arabic(id),
    }
}

fn english(id: MessageId) -> &'static str {
    match id {
        MessageId::SubscriptionDaysTitle => "Subscription Days",
        MessageId::SearchPlaceholder => "Search...",
        MessageId::NoDate => "No date",
        MessageId::DaySelected => "selected",
        MessageId::DayNotSelected => "not selected",
        MessageId::StatusNotSelected => "Not Selected",
        MessageId::StatusSelectedSome => "Partially Selected",
        MessageId::StatusSelectedAll => "Fully Selected",
        MessageId::Edit => "Edit",
        MessageId::NoSearchResults => "No search results found",
        MessageId::NoPlanDays => "No plan days available.",
        MessageId::FetchFailed => "Failed to fetch client data or no plan days available.",
        MessageId::EditClicked => "Edit button clicked",
        MessageId::LoginTitle => "Sign in to COACH",
        MessageId::TokenLabel => "Access token",
        MessageId::SignIn => "Sign in",
        MessageId::SignedIn => "Signed in",
        MessageId::InvalidToken => "The token was rejected. Please try again.",
    }
}

fn arabic(id: MessageId) -> &'static str {
    match id {
        MessageId::SubscriptionDaysTitle => "أيام الاشتراك",
        MessageId::SearchPlaceholder => "البحث...",
        MessageId::NoDate => "تاريخ غير محدد",
        MessageId::DaySelected => "محدد",
        MessageId::DayNotSelected => "غير محدد",
        MessageId::StatusNotSelected => "غير محدد",
        MessageId::StatusSelectedSome => "محدد جزئياً",
        MessageId::StatusSelectedAll => "محدد بالكامل",
        MessageId::Edit => "تعديل",
        MessageId::NoSearchResults => "لا توجد نتائج للبحث",
        MessageId::NoPlanDays => "لا توجد أيام خطة متاحة.",
        MessageId::FetchFailed => "فشل في جلب بيانات العميل أو لا توجد أيام خطة متاحة.",
        MessageId::EditClicked => "تم النقر على زر التعديل",
        MessageId::LoginTitle => "تسجيل الدخول إلى COACH",
        MessageId::TokenLabel => "رمز الدخول",
        MessageId::SignIn => "دخول",
        MessageId::SignedIn => "تم تسجيل الدخول",
        MessageId::InvalidToken => "تم رفض الرمز. حاول مرة أخرى.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ar_selects_arabic() {
        assert_eq!(Locale::from_segment("ar"), Locale::Ar);
        assert_eq!(Locale::from_segment("AR"), Locale::Ar);
        assert_eq!(Locale::from_segment("en"), Locale::En);
        assert_eq!(Locale::from_segment("fr"), Locale::En);
        assert_eq!(Locale::from_segment(""), Locale::En);
    }

    #[test]
    fn selection_labels_are_lowercase() {
        for locale in [Locale::En, Locale::Ar] {
            for id in [MessageId::DaySelected, MessageId::DayNotSelected] {
                let label = message(locale, id);
                assert_eq!(label, label.to_lowercase());
            }
        }
    }
}
