//! Static UI strings for the two supported languages.

use contracts::shared::language::Language;

pub struct HeaderTexts {
    pub home: &'static str,
    pub agence: &'static str,
    pub projects: &'static str,
    pub administrative: &'static str,
    pub commercial: &'static str,
    pub financial: &'static str,
    pub tasks: &'static str,
    pub user: &'static str,
    pub logout: &'static str,
    pub language_toggle: &'static str,
}

pub struct LandingTexts {
    pub performance_panel: &'static str,
    pub login: &'static str,
    pub welcome_title: &'static str,
    pub welcome_subtitle: &'static str,
    pub access_panel: &'static str,
    pub footer_rights: &'static str,
}

pub struct LoginTexts {
    pub title: &'static str,
    pub description: &'static str,
    pub password: &'static str,
    pub login_button: &'static str,
    pub no_account: &'static str,
    pub register_link: &'static str,
    pub back_to_home: &'static str,
}

pub struct RegisterTexts {
    pub title: &'static str,
    pub description: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub password_label: &'static str,
    pub submit_button: &'static str,
    pub loading_button: &'static str,
    pub already_have_account: &'static str,
    pub login_link: &'static str,
    pub success_title: &'static str,
    pub success_description: &'static str,
    pub error_title: &'static str,
    pub error_description: &'static str,
}

pub struct VerifyTexts {
    pub title: &'static str,
    /// `{email}` is replaced by the address the code was sent to
    pub description: &'static str,
    pub code_label: &'static str,
    pub submit_button: &'static str,
    pub loading_button: &'static str,
    pub error_title: &'static str,
    pub error_description: &'static str,
    pub back_to_register: &'static str,
    pub success_title: &'static str,
    pub success_description: &'static str,
    pub invalid_title: &'static str,
    pub invalid_description: &'static str,
    pub expired_description: &'static str,
}

pub struct PerformanceTexts {
    pub title: &'static str,
    pub period_label: &'static str,
    pub consultants_label: &'static str,
    pub clients_label: &'static str,
    pub group_by_client: &'static str,
    pub report_button: &'static str,
    pub loading_button: &'static str,
    pub chart_button: &'static str,
    pub pie_button: &'static str,
    pub export_button: &'static str,
    pub loading_data: &'static str,
    pub welcome_message: &'static str,
    pub no_data_message: &'static str,
    pub bar_chart_title: &'static str,
    pub pie_chart_title: &'static str,
    pub select_all: &'static str,
    pub consultant: &'static str,
    pub client: &'static str,
    pub period: &'static str,
    pub net_revenue: &'static str,
    pub fixed_cost: &'static str,
    pub commission: &'static str,
    pub profit: &'static str,
    pub average_fixed_cost: &'static str,
    pub total: &'static str,
    pub subtotal: &'static str,
    pub system: &'static str,
    pub service_order: &'static str,
    pub invoice_number: &'static str,
    pub issue_date: &'static str,
    pub gross: &'static str,
    pub status: &'static str,
    pub selection_required: &'static str,
    pub fetch_error: &'static str,
    pub action_required: &'static str,
}

pub struct TasksTexts {
    pub title: &'static str,
    pub new_task: &'static str,
    pub title_placeholder: &'static str,
    pub keywords_label: &'static str,
    pub suggestions_label: &'static str,
    pub add_button: &'static str,
    pub done: &'static str,
    pub pending: &'static str,
    pub empty: &'static str,
}

pub struct Texts {
    pub header: HeaderTexts,
    pub landing: LandingTexts,
    pub login: LoginTexts,
    pub register: RegisterTexts,
    pub verify: VerifyTexts,
    pub performance: PerformanceTexts,
    pub tasks: TasksTexts,
}

static PT: Texts = Texts {
    header: HeaderTexts {
        home: "Início",
        agence: "Agence",
        projects: "Projetos",
        administrative: "Administrativo",
        commercial: "Comercial",
        financial: "Financeiro",
        tasks: "Tarefas",
        user: "Usuário",
        logout: "Sair",
        language_toggle: "ES",
    },
    landing: LandingTexts {
        performance_panel: "Painel de Desempenho",
        login: "Login",
        welcome_title: "Bem-vindo ao Painel de Desempenho",
        welcome_subtitle: "Uma solução completa para visualizar e analisar o desempenho comercial dos seus consultores em tempo real.",
        access_panel: "Acessar o Painel",
        footer_rights: "Todos os direitos reservados.",
    },
    login: LoginTexts {
        title: "Login",
        description: "Digite seu email e senha para acessar sua conta.",
        password: "Senha",
        login_button: "Entrar",
        no_account: "Não tem uma conta?",
        register_link: "Registrar-se",
        back_to_home: "Voltar para a página inicial",
    },
    register: RegisterTexts {
        title: "Registrar",
        description: "Crie sua conta preenchendo os campos abaixo.",
        name_label: "Nome",
        name_placeholder: "Seu Nome",
        password_label: "Senha",
        submit_button: "Criar Conta",
        loading_button: "Criando Conta...",
        already_have_account: "Já tem uma conta?",
        login_link: "Login",
        success_title: "Verificação Necessária",
        success_description: "Um código de verificação foi enviado para",
        error_title: "Erro",
        error_description: "Houve um problema ao tentar se registrar. Tente novamente.",
    },
    verify: VerifyTexts {
        title: "Verifique sua Conta",
        description: "Enviamos um código de 6 dígitos para {email}. Insira-o abaixo. (Dica: é 123456)",
        code_label: "Código de Verificação",
        submit_button: "Verificar",
        loading_button: "Verificando...",
        error_title: "Erro",
        error_description: "Não foi possível encontrar o e-mail para verificação.",
        back_to_register: "Voltar ao Registro",
        success_title: "Conta Verificada!",
        success_description: "Sua conta foi verificada com sucesso. Agora você pode iniciar sessão.",
        invalid_title: "Código Inválido",
        invalid_description: "O código de verificação é incorreto. Por favor, tente de novo.",
        expired_description: "O código expirou. Registre-se novamente.",
    },
    performance: PerformanceTexts {
        title: "Performance Comercial",
        period_label: "Período",
        consultants_label: "Consultores",
        clients_label: "Clientes",
        group_by_client: "Por cliente",
        report_button: "Relatório",
        loading_button: "Buscando...",
        chart_button: "Gráfico",
        pie_button: "Pizza",
        export_button: "Exportar CSV",
        loading_data: "Carregando dados...",
        welcome_message: "Por favor, selecione um ou mais consultores e um período, e depois clique em 'Relatório' para ver os resultados.",
        no_data_message: "Não foram encontrados dados para os filtros selecionados.",
        bar_chart_title: "Desempenho dos Consultores",
        pie_chart_title: "Participação na Receita Líquida",
        select_all: "Selecionar todos",
        consultant: "Consultor",
        client: "Cliente",
        period: "Período",
        net_revenue: "Receita Líquida",
        fixed_cost: "Custo Fixo",
        commission: "Comissão",
        profit: "Lucro",
        average_fixed_cost: "Custo Fixo Médio",
        total: "Total",
        subtotal: "Subtotal",
        system: "Sistema",
        service_order: "Ordem de Serviço",
        invoice_number: "Nota Fiscal",
        issue_date: "Emissão",
        gross: "Valor Bruto",
        status: "Situação",
        selection_required: "Por favor, selecione ao menos um consultor e um período de datas.",
        fetch_error: "Ocorreu um erro ao buscar os dados.",
        action_required: "Por favor, gere um relatório com dados antes de mostrar um gráfico.",
    },
    tasks: TasksTexts {
        title: "Tarefas",
        new_task: "Nova Tarefa",
        title_placeholder: "Título da tarefa",
        keywords_label: "Palavras-chave",
        suggestions_label: "Sugestões",
        add_button: "Adicionar",
        done: "Concluída",
        pending: "Pendente",
        empty: "Nenhuma tarefa cadastrada.",
    },
};

static ES: Texts = Texts {
    header: HeaderTexts {
        home: "Inicio",
        agence: "Agence",
        projects: "Proyectos",
        administrative: "Administrativo",
        commercial: "Comercial",
        financial: "Financiero",
        tasks: "Tareas",
        user: "Usuario",
        logout: "Salir",
        language_toggle: "PT",
    },
    landing: LandingTexts {
        performance_panel: "Panel de Desempeño",
        login: "Login",
        welcome_title: "Bienvenido al Panel de Desempeño",
        welcome_subtitle: "Una solución completa para visualizar y analizar el desempeño comercial de sus consultores en tiempo real.",
        access_panel: "Acceder al Panel",
        footer_rights: "Todos los derechos reservados.",
    },
    login: LoginTexts {
        title: "Login",
        description: "Ingrese su email y contraseña para acceder a su cuenta.",
        password: "Contraseña",
        login_button: "Entrar",
        no_account: "¿No tiene una cuenta?",
        register_link: "Registrarse",
        back_to_home: "Volver a la página de inicio",
    },
    register: RegisterTexts {
        title: "Registrarse",
        description: "Cree su cuenta completando los campos a continuación.",
        name_label: "Nombre",
        name_placeholder: "Su Nombre",
        password_label: "Contraseña",
        submit_button: "Crear Cuenta",
        loading_button: "Creando Cuenta...",
        already_have_account: "¿Ya tiene una cuenta?",
        login_link: "Login",
        success_title: "Verificación Necesaria",
        success_description: "Se ha enviado un código de verificación a",
        error_title: "Error",
        error_description: "Hubo un problema al intentar registrarse. Intente de nuevo.",
    },
    verify: VerifyTexts {
        title: "Verifique su Cuenta",
        description: "Enviamos un código de 6 dígitos a {email}. Ingréselo a continuación. (Pista: es 123456)",
        code_label: "Código de Verificación",
        submit_button: "Verificar",
        loading_button: "Verificando...",
        error_title: "Error",
        error_description: "No se pudo encontrar el correo electrónico para la verificación.",
        back_to_register: "Volver al Registro",
        success_title: "¡Cuenta Verificada!",
        success_description: "Su cuenta ha sido verificada con éxito. Ahora puede iniciar sesión.",
        invalid_title: "Código Inválido",
        invalid_description: "El código de verificación es incorrecto. Por favor, intente de nuevo.",
        expired_description: "El código ha expirado. Regístrese de nuevo.",
    },
    performance: PerformanceTexts {
        title: "Desempeño Comercial",
        period_label: "Período",
        consultants_label: "Consultores",
        clients_label: "Clientes",
        group_by_client: "Por cliente",
        report_button: "Relatório",
        loading_button: "Buscando...",
        chart_button: "Gráfico",
        pie_button: "Pizza",
        export_button: "Exportar CSV",
        loading_data: "Cargando datos...",
        welcome_message: "Por favor, seleccione uno o más consultores y un período, y luego haga clic en \"Relatório\" para ver los resultados.",
        no_data_message: "No se encontraron datos para los filtros seleccionados.",
        bar_chart_title: "Desempeño de los Consultores",
        pie_chart_title: "Participación en la Receta Líquida",
        select_all: "Seleccionar todos",
        consultant: "Consultor",
        client: "Cliente",
        period: "Período",
        net_revenue: "Ingresos Netos",
        fixed_cost: "Costo Fijo",
        commission: "Comisión",
        profit: "Ganancia",
        average_fixed_cost: "Costo Fijo Promedio",
        total: "Total",
        subtotal: "Subtotal",
        system: "Sistema",
        service_order: "Orden de Servicio",
        invoice_number: "Factura",
        issue_date: "Emisión",
        gross: "Valor Bruto",
        status: "Estado",
        selection_required: "Por favor, seleccione al menos un consultor y un período de fechas.",
        fetch_error: "Ocurrió un error al buscar los datos.",
        action_required: "Por favor, genere un reporte con datos antes de mostrar un gráfico.",
    },
    tasks: TasksTexts {
        title: "Tareas",
        new_task: "Nueva Tarea",
        title_placeholder: "Título de la tarea",
        keywords_label: "Palabras clave",
        suggestions_label: "Sugerencias",
        add_button: "Agregar",
        done: "Completada",
        pending: "Pendiente",
        empty: "No hay tareas registradas.",
    },
};

pub fn texts(language: Language) -> &'static Texts {
    match language {
        Language::Pt => &PT,
        Language::Es => &ES,
    }
}

/// Verification prompt with the address filled in
pub fn verify_description(language: Language, email: &str) -> String {
    texts(language).verify.description.replace("{email}", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_differ_where_expected() {
        assert_eq!(texts(Language::Pt).performance.net_revenue, "Receita Líquida");
        assert_eq!(texts(Language::Es).performance.net_revenue, "Ingresos Netos");
        assert_eq!(texts(Language::Pt).header.language_toggle, "ES");
        assert_eq!(texts(Language::Es).header.language_toggle, "PT");
    }

    #[test]
    fn test_verify_description_fills_email() {
        let text = verify_description(Language::Es, "ana@agence.com");
        assert!(text.contains("a ana@agence.com."));
        assert!(!text.contains("{email}"));
    }
}
